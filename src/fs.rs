//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes the translation to `path` through a sibling temp file and a rename,
/// so an interrupted run never leaves a half-written output file behind.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid output path: {}", path.display()))?
        .to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write output file: {}", temp_path.display()))?;

    // Same directory, so the rename stays on one filesystem
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    Ok(())
}
