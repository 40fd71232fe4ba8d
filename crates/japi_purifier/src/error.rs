use japi_descriptor::DescriptorError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a purification run. There is no per-type isolation:
/// the first failure surfaces to the caller and the run stops.
#[derive(Error, Debug)]
pub enum PurifyError {
    #[error("Failed to resolve type '{name}'")]
    Resolution {
        name: String,
        #[source]
        source: DescriptorError,
    },
    #[error("Failed to write generated source {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
