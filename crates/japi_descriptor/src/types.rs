// Descriptor model for one Java type's public shape: kind, members,
// relationships. Descriptors are produced by an external front end
// (reflection dump, IDL parser) and never mutated here.
use serde::{Deserialize, Serialize};

/// Recursive Java type reference as it appears in signatures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JavaType {
    /// Primitive types: int, boolean, char, etc.
    Primitive(String),
    /// Reference types, fully qualified, with optional generic arguments.
    Reference {
        name: String,
        #[serde(default)]
        generic_args: Vec<JavaType>,
    },
    /// Array types: int[], java.lang.String[][]
    Array {
        element_type: Box<JavaType>,
        dimensions: usize,
    },
}

impl JavaType {
    pub fn primitive(name: impl Into<String>) -> Self {
        JavaType::Primitive(name.into())
    }

    pub fn reference(name: impl Into<String>) -> Self {
        JavaType::Reference {
            name: name.into(),
            generic_args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, generic_args: Vec<JavaType>) -> Self {
        JavaType::Reference {
            name: name.into(),
            generic_args,
        }
    }

    pub fn array(element_type: JavaType, dimensions: usize) -> Self {
        JavaType::Array {
            element_type: Box::new(element_type),
            dimensions,
        }
    }

    pub fn string() -> Self {
        Self::reference("java.lang.String")
    }

    pub fn object() -> Self {
        Self::reference("java.lang.Object")
    }

    /// Fully-qualified name for reference types, `None` otherwise.
    pub fn reference_name(&self) -> Option<&str> {
        match self {
            JavaType::Reference { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Declaration kind of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeKind {
    #[default]
    Interface,
    Enum,
    ValueObject,
}

/// Generic type parameter declared by a type, e.g. `T extends Number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: String,
    #[serde(default)]
    pub bounds: Vec<JavaType>,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bounded(name: impl Into<String>, bounds: Vec<JavaType>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}

/// Signature of one declared method, body-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<JavaType>,
    pub return_type: JavaType,
    #[serde(default)]
    pub throws: Vec<JavaType>,
}

/// One declared field. `value` carries the literal of a static
/// serialization-version field and is ignored everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub java_type: JavaType,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub value: Option<i64>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, java_type: JavaType) -> Self {
        Self {
            name: name.into(),
            java_type,
            is_static: false,
            value: None,
        }
    }

    pub fn serial_version_uid(value: i64) -> Self {
        Self {
            name: "serialVersionUID".to_string(),
            java_type: JavaType::primitive("long"),
            is_static: true,
            value: Some(value),
        }
    }
}

/// Literal argument captured from one enum constant's constructor call,
/// one entry per non-static field in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstantValue {
    Text(String),
    Long(i64),
    Short(i16),
    Int(i32),
    Double(f64),
    /// Fallback for values with no recognized literal form; rendered verbatim.
    Raw(String),
}

/// One enum constant and its constructor arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumConstantDescriptor {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<ConstantValue>,
}

impl EnumConstantDescriptor {
    pub fn new(name: impl Into<String>, arguments: Vec<ConstantValue>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

/// Complete public shape of one type, keyed by fully-qualified name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Fully-qualified name; unique identity within a descriptor set.
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameter>,
    /// Superclass reference; only meaningful for value objects.
    #[serde(default)]
    pub superclass: Option<JavaType>,
    /// Directly declared interfaces, in declaration order.
    #[serde(default)]
    pub interfaces: Vec<JavaType>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
    /// Enum constants, in declaration order; empty for non-enums.
    #[serde(default)]
    pub constants: Vec<EnumConstantDescriptor>,
}

impl TypeDescriptor {
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Interface,
            ..Self::default()
        }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Enum,
            ..Self::default()
        }
    }

    pub fn value_object(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::ValueObject,
            ..Self::default()
        }
    }

    /// Name without its package qualifier.
    pub fn simple_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(index) => &self.name[index + 1..],
            None => self.name.as_str(),
        }
    }

    /// Package qualifier, `None` for the default package.
    pub fn package(&self) -> Option<&str> {
        self.name.rfind('.').map(|index| &self.name[..index])
    }
}
