use thiserror::Error;

/// Errors raised while resolving or loading type descriptors.
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("Unknown type: {name}")]
    UnknownType { name: String },
    #[error("Descriptor I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Descriptor parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
