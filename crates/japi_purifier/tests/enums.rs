use japi_descriptor::{
    ConstantValue, DescriptorSet, EnumConstantDescriptor, FieldDescriptor, JavaType,
    MethodDescriptor, TypeDescriptor,
};
use japi_purifier::{target_path, Purifier, PurifyConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config(output: &Path, base_packages: &[&str]) -> PurifyConfig {
    PurifyConfig::new(
        output,
        base_packages.iter().map(|p| p.to_string()).collect(),
    )
}

/// Root interface whose sole method returns the type under test; `purify`
/// only accepts interface roots, so every enum is reached through one.
fn root_returning(set: &mut DescriptorSet, returned: &str) -> String {
    let root_name = "com.acme.api.Root".to_string();
    let mut root = TypeDescriptor::interface(&root_name);
    root.methods.push(MethodDescriptor {
        name: "get".to_string(),
        parameters: Vec::new(),
        return_type: JavaType::reference(returned),
        throws: Vec::new(),
    });
    set.insert(root);
    root_name
}

fn read_emitted(output: &Path, name: &str) -> String {
    let path = target_path(output, name);
    fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("expected emitted source at {}", path.display()))
}

#[test]
fn constants_and_trailing_fields_share_declaration_order() {
    let mut set = DescriptorSet::new();
    let root = root_returning(&mut set, "com.acme.api.Color");

    let mut color = TypeDescriptor::enumeration("com.acme.api.Color");
    color
        .interfaces
        .push(JavaType::reference("com.acme.api.HasCode"));
    color
        .fields
        .push(FieldDescriptor::new("code", JavaType::string()));
    color
        .fields
        .push(FieldDescriptor::new("weight", JavaType::primitive("long")));
    color.constants.push(EnumConstantDescriptor::new(
        "RED",
        vec![ConstantValue::Text("r".to_string()), ConstantValue::Long(5)],
    ));
    color.constants.push(EnumConstantDescriptor::new(
        "BLUE",
        vec![ConstantValue::Text("b".to_string()), ConstantValue::Long(7)],
    ));
    set.insert(color);

    let dir = TempDir::new().expect("temp output dir");
    let mut purifier = Purifier::new(&set, config(dir.path(), &["com.acme"]));
    purifier.purify(&root).expect("purify run");

    assert_eq!(
        read_emitted(dir.path(), "com.acme.api.Color"),
        "package com.acme.api;\n\n\
         @lombok.Getter\n\
         @lombok.AllArgsConstructor\n\
         public enum Color implements com.acme.api.HasCode {\n    \
         RED(\"r\", 5L),\n    \
         BLUE(\"b\", 7L),\n    \
         ;\n    \
         private final java.lang.String code;\n    \
         private final long weight;\n\
         }\n"
    );
}

#[test]
fn short_values_render_with_narrowing_cast() {
    let mut set = DescriptorSet::new();
    let root = root_returning(&mut set, "com.acme.api.Width");

    let mut width = TypeDescriptor::enumeration("com.acme.api.Width");
    width
        .fields
        .push(FieldDescriptor::new("bits", JavaType::primitive("short")));
    width.constants.push(EnumConstantDescriptor::new(
        "NARROW",
        vec![ConstantValue::Short(2)],
    ));
    set.insert(width);

    let dir = TempDir::new().expect("temp output dir");
    let mut purifier = Purifier::new(&set, config(dir.path(), &["com.acme"]));
    purifier.purify(&root).expect("purify run");

    let source = read_emitted(dir.path(), "com.acme.api.Width");
    assert!(source.contains("NARROW((short)2),"));
}

#[test]
fn fieldless_constants_render_bare_names() {
    let mut set = DescriptorSet::new();
    let root = root_returning(&mut set, "com.acme.api.Toggle");

    let mut toggle = TypeDescriptor::enumeration("com.acme.api.Toggle");
    toggle
        .constants
        .push(EnumConstantDescriptor::new("ON", Vec::new()));
    toggle
        .constants
        .push(EnumConstantDescriptor::new("OFF", Vec::new()));
    set.insert(toggle);

    let dir = TempDir::new().expect("temp output dir");
    let mut purifier = Purifier::new(&set, config(dir.path(), &["com.acme"]));
    purifier.purify(&root).expect("purify run");

    let source = read_emitted(dir.path(), "com.acme.api.Toggle");
    assert!(source.contains("    ON,\n    OFF,\n    ;\n"));
    assert!(!source.contains("private final"));
}

#[test]
fn static_enum_fields_are_excluded_from_constructor_block() {
    let mut set = DescriptorSet::new();
    let root = root_returning(&mut set, "com.acme.api.Level");

    let mut level = TypeDescriptor::enumeration("com.acme.api.Level");
    level.fields.push(FieldDescriptor {
        name: "DEFAULT_NAME".to_string(),
        java_type: JavaType::string(),
        is_static: true,
        value: None,
    });
    level
        .fields
        .push(FieldDescriptor::new("rank", JavaType::primitive("int")));
    level.constants.push(EnumConstantDescriptor::new(
        "LOW",
        vec![ConstantValue::Int(1)],
    ));
    set.insert(level);

    let dir = TempDir::new().expect("temp output dir");
    let mut purifier = Purifier::new(&set, config(dir.path(), &["com.acme"]));
    purifier.purify(&root).expect("purify run");

    let source = read_emitted(dir.path(), "com.acme.api.Level");
    assert!(source.contains("LOW(1),"));
    assert!(source.contains("private final int rank;"));
    assert!(!source.contains("DEFAULT_NAME"));
}

#[test]
fn enum_without_constants_renders_empty_body() {
    let mut set = DescriptorSet::new();
    let root = root_returning(&mut set, "com.acme.api.Hollow");
    set.insert(TypeDescriptor::enumeration("com.acme.api.Hollow"));

    let dir = TempDir::new().expect("temp output dir");
    let mut purifier = Purifier::new(&set, config(dir.path(), &["com.acme"]));
    purifier.purify(&root).expect("purify run");

    assert_eq!(
        read_emitted(dir.path(), "com.acme.api.Hollow"),
        "package com.acme.api;\n\n\
         @lombok.Getter\n\
         @lombok.AllArgsConstructor\n\
         public enum Hollow {\n\
         }\n"
    );
}

// Upstream behavior: enum field types are never walked, unlike interface
// and value-object member types. Pinned here rather than silently fixed.
#[test]
fn enum_field_types_are_not_recursively_emitted() {
    let mut set = DescriptorSet::new();
    let root = root_returning(&mut set, "com.acme.api.Status");

    let mut status = TypeDescriptor::enumeration("com.acme.api.Status");
    status
        .fields
        .push(FieldDescriptor::new("detail", JavaType::reference("com.acme.api.Detail")));
    status.constants.push(EnumConstantDescriptor::new(
        "OK",
        vec![ConstantValue::Raw("null".to_string())],
    ));
    set.insert(status);
    set.insert(TypeDescriptor::value_object("com.acme.api.Detail"));

    let dir = TempDir::new().expect("temp output dir");
    let mut purifier = Purifier::new(&set, config(dir.path(), &["com.acme"]));
    purifier.purify(&root).expect("purify run");

    let source = read_emitted(dir.path(), "com.acme.api.Status");
    assert!(source.contains("private final com.acme.api.Detail detail;"));
    assert!(!target_path(dir.path(), "com.acme.api.Detail").exists());
}
