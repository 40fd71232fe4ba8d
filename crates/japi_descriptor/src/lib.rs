// japi_descriptor - Read-only type descriptor model consumed by the purifier
mod error;
mod provider;
mod types;

pub use error::DescriptorError;
pub use provider::{DescriptorProvider, DescriptorSet};
pub use types::{
    ConstantValue, EnumConstantDescriptor, FieldDescriptor, JavaType, MethodDescriptor,
    TypeDescriptor, TypeKind, TypeParameter,
};
