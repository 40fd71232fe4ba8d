use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Configuration options for one purification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurifyConfig {
    /// Root directory the generated source tree is written under.
    pub output_dir: PathBuf,
    /// Package prefixes eligible for emission; a type outside every prefix
    /// is rendered by name only and never gets its own file.
    pub base_packages: BTreeSet<String>,
    /// Indentation string used inside emitted type bodies.
    #[serde(default = "default_indent")]
    pub indent: String,
}

fn default_indent() -> String {
    "    ".to_string()
}

impl PurifyConfig {
    pub fn new(output_dir: impl Into<PathBuf>, base_packages: BTreeSet<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            base_packages,
            indent: default_indent(),
        }
    }
}

impl Default for PurifyConfig {
    fn default() -> Self {
        Self::new("generated-sources/japi", BTreeSet::new())
    }
}
