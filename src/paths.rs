//! Path validation and output filename derivation

use std::path::{Path, PathBuf};
use crate::error::{Error, Result};

/// Fail with `FileNotFound` unless `path` exists
pub fn require_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Fail with `DirectoryNotFound` unless `path` exists
pub fn require_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::DirectoryNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Derive `<save_dir>/<input_stem><suffix>.<extension>`
///
/// The stem drops only the final extension, so `report.v2.pdf` keeps
/// `report.v2`.
///
/// # Example
///
/// ```
/// use pdftools::paths::output_path;
/// use std::path::Path;
///
/// let out = output_path(Path::new("in/report.pdf"), Path::new("out"), "_new", "pdf");
/// assert_eq!(out, Path::new("out/report_new.pdf"));
/// ```
pub fn output_path(input: &Path, save_dir: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    save_dir.join(format!("{}{}.{}", stem, suffix, extension))
}
