use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use japi_descriptor::{
    DescriptorProvider, FieldDescriptor, JavaType, TypeDescriptor, TypeKind,
};

use crate::builder::JavaSourceBuilder;
use crate::config::PurifyConfig;
use crate::error::PurifyError;
use crate::render::{
    render_constant_value, render_interface_clause, render_type, render_type_parameters,
};
use crate::sink;

/// Marker inserted on enums: downstream compilation generates read accessors.
const ENUM_ACCESSOR_MARKER: &str = "@lombok.Getter";
/// Marker inserted on enums: downstream compilation generates the
/// all-fields constructor the emitted constant argument lists call.
const ENUM_CONSTRUCTOR_MARKER: &str = "@lombok.AllArgsConstructor";
/// Marker inserted on value objects: accessors, equality and string form.
const POJO_MARKER: &str = "@lombok.Data";

const SERIALIZABLE_INTERFACE: &str = "java.io.Serializable";
const SERIAL_VERSION_FIELD: &str = "serialVersionUID";

/// One purification run over one root set. Owns the per-run visited map,
/// so concurrent runs need independently constructed instances.
pub struct Purifier<'p, P: DescriptorProvider> {
    provider: &'p P,
    config: PurifyConfig,
    visited: BTreeMap<String, PathBuf>,
}

impl<'p, P: DescriptorProvider> Purifier<'p, P> {
    pub fn new(provider: &'p P, config: PurifyConfig) -> Self {
        Self {
            provider,
            config,
            visited: BTreeMap::new(),
        }
    }

    /// Purify one root. Only interface roots are accepted; anything else
    /// resolves successfully and is then silently ignored, so a driver may
    /// hand over arbitrary names. An unresolvable root aborts the run.
    pub fn purify(&mut self, root: &str) -> Result<(), PurifyError> {
        let descriptor = self.resolve(root)?;
        if descriptor.kind == TypeKind::Interface {
            self.process(descriptor)?;
        }
        Ok(())
    }

    /// Paths emitted so far, keyed by fully-qualified type name.
    pub fn emitted(&self) -> &BTreeMap<String, PathBuf> {
        &self.visited
    }

    fn resolve(&self, name: &str) -> Result<&'p TypeDescriptor, PurifyError> {
        self.provider
            .resolve(name)
            .map_err(|source| PurifyError::Resolution {
                name: name.to_string(),
                source,
            })
    }

    /// Emit one type and every in-scope type reachable from the members it
    /// renders. Marking the visited map before emission is the sole
    /// cycle-breaking mechanism.
    fn process(&mut self, descriptor: &TypeDescriptor) -> Result<(), PurifyError> {
        if !self.included(&descriptor.name) {
            return Ok(());
        }
        let path = sink::target_path(&self.config.output_dir, &descriptor.name);
        self.visited.insert(descriptor.name.clone(), path.clone());

        let unit = match descriptor.kind {
            TypeKind::Interface => self.emit_interface(descriptor)?,
            TypeKind::Enum => self.emit_enum(descriptor)?,
            TypeKind::ValueObject => self.emit_pojo(descriptor)?,
        };

        sink::write_source(&path, &unit).map_err(|source| PurifyError::Io { path, source })
    }

    /// A name is in scope when it falls under a configured base package and
    /// has not been emitted yet this run.
    fn included(&self, name: &str) -> bool {
        !self.visited.contains_key(name)
            && self
                .config
                .base_packages
                .iter()
                .any(|prefix| name.starts_with(prefix.as_str()))
    }

    /// Recursively dispatch a type reference back into the walker:
    /// parameterized references unwrap to their raw type and every
    /// argument, arrays to their element type, primitives end the walk.
    fn walk(&mut self, java_type: &JavaType) -> Result<(), PurifyError> {
        match java_type {
            JavaType::Primitive(_) => Ok(()),
            JavaType::Reference { name, generic_args } => {
                self.walk_named(name)?;
                for arg in generic_args {
                    self.walk(arg)?;
                }
                Ok(())
            }
            JavaType::Array { element_type, .. } => self.walk(element_type),
        }
    }

    fn walk_named(&mut self, name: &str) -> Result<(), PurifyError> {
        // Out-of-scope references never need resolving; their names only
        // appear inside signatures of types that mention them.
        if !self.included(name) {
            return Ok(());
        }
        let descriptor = self.resolve(name)?;
        self.process(descriptor)
    }

    fn emit_interface(&mut self, descriptor: &TypeDescriptor) -> Result<String, PurifyError> {
        let mut builder = self.builder();
        self.push_package(&mut builder, descriptor);

        let mut header = String::from("public interface ");
        header.push_str(descriptor.simple_name());
        header.push_str(&render_type_parameters(&descriptor.type_parameters));
        header.push_str(&render_interface_clause("extends", &descriptor.interfaces));
        builder.push_line(&format!("{} {{", header));
        builder.indent();

        for method in &descriptor.methods {
            self.walk(&method.return_type)?;

            let mut line = render_type(&method.return_type);
            line.push(' ');
            line.push_str(&method.name);
            line.push('(');
            for (index, parameter) in method.parameters.iter().enumerate() {
                if index > 0 {
                    line.push_str(", ");
                }
                // Original parameter names are not assumed available.
                line.push_str(&format!("{} var{}", render_type(parameter), index));
                self.walk(parameter)?;
            }
            line.push(')');
            if !method.throws.is_empty() {
                // Exception types are rendered but never walked; they are
                // assumed to be stable, pre-existing types.
                let throws: Vec<String> = method.throws.iter().map(render_type).collect();
                line.push_str(" throws ");
                line.push_str(&throws.join(", "));
            }
            line.push(';');
            builder.push_line(&line);
        }

        builder.dedent();
        builder.push_line("}");
        Ok(builder.build())
    }

    fn emit_enum(&mut self, descriptor: &TypeDescriptor) -> Result<String, PurifyError> {
        let mut builder = self.builder();
        self.push_package(&mut builder, descriptor);
        builder.push_line(ENUM_ACCESSOR_MARKER);
        builder.push_line(ENUM_CONSTRUCTOR_MARKER);

        let mut header = String::from("public enum ");
        header.push_str(descriptor.simple_name());
        header.push_str(&render_type_parameters(&descriptor.type_parameters));
        header.push_str(&render_interface_clause(
            "implements",
            &descriptor.interfaces,
        ));
        builder.push_line(&format!("{} {{", header));
        builder.indent();

        let fields: Vec<&FieldDescriptor> = descriptor
            .fields
            .iter()
            .filter(|field| !field.is_static)
            .collect();

        if !descriptor.constants.is_empty() {
            for constant in &descriptor.constants {
                let mut line = constant.name.clone();
                if !fields.is_empty() {
                    let arguments: Vec<String> = constant
                        .arguments
                        .iter()
                        .map(render_constant_value)
                        .collect();
                    line.push('(');
                    line.push_str(&arguments.join(", "));
                    line.push(')');
                }
                line.push(',');
                builder.push_line(&line);
            }
            builder.push_line(";");
            // Field order here must match the constant argument order above,
            // or the generated all-fields constructor breaks arity.
            for field in &fields {
                builder.push_line(&format!(
                    "private final {} {};",
                    render_type(&field.java_type),
                    field.name
                ));
            }
        }

        builder.dedent();
        builder.push_line("}");
        Ok(builder.build())
    }

    fn emit_pojo(&mut self, descriptor: &TypeDescriptor) -> Result<String, PurifyError> {
        let mut builder = self.builder();
        self.push_package(&mut builder, descriptor);
        builder.push_line(POJO_MARKER);

        let mut header = String::from("public class ");
        header.push_str(descriptor.simple_name());
        header.push_str(&render_type_parameters(&descriptor.type_parameters));
        if let Some(superclass) = &descriptor.superclass {
            if superclass.reference_name() != Some("java.lang.Object") {
                header.push_str(" extends ");
                header.push_str(&render_type(superclass));
                self.walk(superclass)?;
            }
        }
        if descriptor
            .interfaces
            .iter()
            .any(|interface| self.is_serializable(interface))
        {
            header.push_str(" implements ");
            header.push_str(SERIALIZABLE_INTERFACE);
        }
        builder.push_line(&format!("{} {{", header));
        builder.indent();

        for field in &descriptor.fields {
            if field.is_static {
                // The serialization-version field is the only static member
                // that survives purification.
                if field.name == SERIAL_VERSION_FIELD {
                    if let Some(value) = field.value {
                        builder.push_line(&format!(
                            "private static final long {} = {}L;",
                            SERIAL_VERSION_FIELD, value
                        ));
                    }
                }
            } else {
                builder.push_line(&format!(
                    "private {} {};",
                    render_type(&field.java_type),
                    field.name
                ));
                self.walk(&field.java_type)?;
            }
        }

        builder.dedent();
        builder.push_line("}");
        Ok(builder.build())
    }

    /// Whether a declared interface marks the type as serializable, either
    /// by being `java.io.Serializable` itself or by reaching it through its
    /// own transitive interface graph. Unresolvable external interfaces are
    /// simply not evidence.
    fn is_serializable(&self, interface: &JavaType) -> bool {
        let Some(name) = interface.reference_name() else {
            return false;
        };
        let mut pending = vec![name];
        let mut seen = BTreeSet::new();
        while let Some(name) = pending.pop() {
            if name == SERIALIZABLE_INTERFACE {
                return true;
            }
            if !seen.insert(name) {
                continue;
            }
            if let Some(descriptor) = self.provider.lookup(name) {
                for parent in &descriptor.interfaces {
                    if let Some(parent_name) = parent.reference_name() {
                        pending.push(parent_name);
                    }
                }
            }
        }
        false
    }

    fn push_package(&self, builder: &mut JavaSourceBuilder, descriptor: &TypeDescriptor) {
        if let Some(package) = descriptor.package() {
            builder.push_line(&format!("package {};", package));
            builder.push_line("");
        }
    }

    fn builder(&self) -> JavaSourceBuilder {
        JavaSourceBuilder::new(self.config.indent.clone())
    }
}
