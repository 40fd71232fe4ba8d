// Pure text rendering for signatures and literals. Names always print
// fully qualified; only the emitted type's own header uses its simple name.
use japi_descriptor::{ConstantValue, JavaType, TypeParameter};

pub(crate) fn render_type(java_type: &JavaType) -> String {
    match java_type {
        JavaType::Primitive(name) => name.clone(),
        JavaType::Reference { name, generic_args } => {
            if generic_args.is_empty() {
                name.clone()
            } else {
                let rendered: Vec<String> = generic_args.iter().map(render_type).collect();
                format!("{}<{}>", name, rendered.join(", "))
            }
        }
        JavaType::Array {
            element_type,
            dimensions,
        } => {
            format!("{}{}", render_type(element_type), "[]".repeat(*dimensions))
        }
    }
}

pub(crate) fn render_type_parameters(type_parameters: &[TypeParameter]) -> String {
    if type_parameters.is_empty() {
        return String::new();
    }
    let mut parts = Vec::new();
    for param in type_parameters {
        let mut fragment = param.name.clone();
        if !param.bounds.is_empty() {
            let bounds: Vec<String> = param.bounds.iter().map(render_type).collect();
            fragment.push_str(" extends ");
            fragment.push_str(&bounds.join(" & "));
        }
        parts.push(fragment);
    }
    format!("<{}>", parts.join(", "))
}

pub(crate) fn render_interface_clause(prefix: &str, interfaces: &[JavaType]) -> String {
    if interfaces.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = interfaces.iter().map(render_type).collect();
    format!(" {} {}", prefix, rendered.join(", "))
}

pub(crate) fn render_constant_value(value: &ConstantValue) -> String {
    match value {
        ConstantValue::Text(text) => format!("\"{}\"", escape_string(text)),
        ConstantValue::Long(value) => format!("{}L", value),
        ConstantValue::Short(value) => format!("(short){}", value),
        ConstantValue::Int(value) => value.to_string(),
        ConstantValue::Double(value) => value.to_string(),
        ConstantValue::Raw(text) => text.clone(),
    }
}

pub(crate) fn escape_string(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
