use std::fs;
use std::io;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

const SOURCE_SUFFIX: &str = ".java";

/// Map a fully-qualified type name to its source file path under the
/// output root: package separators become path separators.
pub fn target_path(output_dir: &Path, qualified_name: &str) -> PathBuf {
    let relative = qualified_name.replace('.', MAIN_SEPARATOR_STR);
    output_dir.join(format!("{}{}", relative, SOURCE_SUFFIX))
}

/// Write one emitted unit, creating parent directories and replacing any
/// pre-existing file. Not transactional: a failure mid-write leaves the
/// file for the current type incomplete, never files already written.
pub(crate) fn write_source(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    if path.exists() {
        fs::remove_file(path)?;
    }
    fs::write(path, content)
}
