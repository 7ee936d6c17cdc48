// src/core/scanner/file.rs
use std::fs;
use std::path::Path;

use crate::error::ScanError;

/// Reads a whole file as UTF-8 text.
///
/// The handle is closed before this returns, on success or failure. Invalid
/// UTF-8 surfaces as an `InvalidData` I/O error inside [`ScanError::FileRead`].
///
/// # Errors
///
/// Returns [`ScanError::FileRead`] naming the file when it cannot be opened,
/// read, or decoded.
#[inline]
pub fn read_text_file(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|source| ScanError::FileRead {
        name: display_name(path),
        source,
    })
}

/// The file name as shown in messages, falling back to the full path.
///
/// Names that are not valid UTF-8 are converted lossily.
#[inline]
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
