// japi_purifier - Type-graph purification and signature-only Java emission
mod builder;
mod config;
mod error;
mod purifier;
mod render;
mod sink;

pub use config::PurifyConfig;
pub use error::PurifyError;
pub use purifier::Purifier;
pub use sink::target_path;
