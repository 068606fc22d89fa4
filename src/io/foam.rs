//! Writing generated field files to disk.

use crate::generate::FieldFiles;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes each generated field into `dir` as a file named after the field
/// (`U`, `p`, `k`, ...). Creates `dir` if needed and overwrites existing files.
///
/// Returns the written paths in generation order.
pub fn write_field_files(dir: &Path, files: &FieldFiles) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut written = Vec::with_capacity(files.len());
    for (field, contents) in files {
        let path = dir.join(field.name());
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        tracing::info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
