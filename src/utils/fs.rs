//! File system utilities.

use crate::Result;
use std::path::Path;

/// Check that an input file exists.
pub fn ensure_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::InputNotFound(path.display().to_string()));
    }
    Ok(())
}

/// Write a generated document, creating parent directories as needed.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}
