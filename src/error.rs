// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything a corpus scan can report instead of a letter report.
///
/// `NoTextFiles` and `NoLetters` are ordinary outcomes rather than failures;
/// see [`ScanError::is_empty_result`]. Display strings are the exact console
/// lines printed for each case.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid folder path. Please provide a valid directory.")]
    InvalidDirectory(PathBuf),

    #[error("Error accessing folder {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Error reading file {name}: {source}")]
    FileRead {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("No text files found in the specified folder.")]
    NoTextFiles,

    #[error("No letters found in the text files.")]
    NoLetters,
}

impl ScanError {
    /// True for outcomes that mean "nothing to count" rather than a failure.
    #[inline]
    #[must_use]
    pub const fn is_empty_result(&self) -> bool {
        matches!(self, Self::NoTextFiles | Self::NoLetters)
    }
}
