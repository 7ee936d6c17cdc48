// src/core/scanner.rs
pub mod file;
pub mod letters;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::models::LetterStats;
use crate::utils::is_text_file;
use self::file::{display_name, read_text_file};

/// Result of one pass over a corpus directory.
#[derive(Debug, Default)]
pub struct CorpusScan {
    pub stats: LetterStats,
    /// Per-file failures, in the order the files were visited.
    pub failures: Vec<ScanError>,
}

/// Lists the `*.txt` entries directly inside `dir`.
///
/// Subdirectories are not descended into. The suffix check is case-sensitive
/// and compares raw name bytes, so names that are not valid UTF-8 still
/// match. It applies to every entry type, so a directory named `x.txt` is listed
/// and later fails to read like any other unreadable file. Entries are sorted
/// by file name so that first-seen order, and with it tie-breaking, is the
/// same on every run.
///
/// # Errors
///
/// * [`ScanError::InvalidDirectory`] if `dir` is missing or not a directory
/// * [`ScanError::DirectoryAccess`] if the directory cannot be listed
/// * [`ScanError::NoTextFiles`] if no entry matches
#[inline]
pub fn list_text_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::InvalidDirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ScanError::DirectoryAccess {
            path: dir.to_path_buf(),
            source,
        })?;

        if is_text_file(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    if files.is_empty() {
        return Err(ScanError::NoTextFiles);
    }
    Ok(files)
}

/// Reads every `*.txt` file in `dir` and tallies letters and letter pairs.
///
/// A file that cannot be read is recorded in [`CorpusScan::failures`] and
/// skipped; counts from the other files are kept.
///
/// # Errors
///
/// Directory-level outcomes from [`list_text_files`]. Per-file errors never
/// abort the scan.
#[inline]
pub fn scan_corpus(dir: &Path) -> Result<CorpusScan, ScanError> {
    let files = list_text_files(dir)?;
    log::info!("Scanning {} text files in {}", files.len(), dir.display());

    let mut scan = CorpusScan::default();
    for path in &files {
        match read_text_file(path) {
            Ok(content) => {
                let letters_before = scan.stats.total_letters();
                let pairs_before = scan.stats.total_pairs();
                scan.stats.record_text(&content);
                log::debug!(
                    "{}: {} letters, {} pairs",
                    display_name(path),
                    scan.stats.total_letters().saturating_sub(letters_before),
                    scan.stats.total_pairs().saturating_sub(pairs_before),
                );
            }
            Err(err) => {
                log::debug!("Skipping {}: {err}", path.display());
                scan.failures.push(err);
            }
        }
    }

    log::info!(
        "Scanned {} files ({} failed): {} letters, {} pairs",
        scan.stats.files_scanned,
        scan.failures.len(),
        scan.stats.total_letters(),
        scan.stats.total_pairs(),
    );
    Ok(scan)
}
