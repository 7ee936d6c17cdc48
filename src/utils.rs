// src/utils.rs
use crate::error::ScanError;
use crate::models::FrequencyTable;
use crate::models::LetterStats;
use std::ffi::OsStr;
use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};
use std::path::Path;

pub const TEXT_FILE_SUFFIX: &str = ".txt";

/// Whether a directory entry name ends with the literal `.txt` suffix.
///
/// Compares raw bytes, so names that are not valid UTF-8 still match.
#[inline]
#[must_use]
pub fn is_text_file(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(TEXT_FILE_SUFFIX.as_bytes())
}

fn write_top_entries<W, K>(out: &mut W, table: &FrequencyTable<K>, top: usize) -> io::Result<()>
where
    W: Write,
    K: Eq + Hash + Display,
{
    for (key, count) in table.most_common(top) {
        writeln!(out, "'{key}': {count} occurrences")?;
    }
    Ok(())
}

/// Writes the ranked letter and pair sections for `folder`.
///
/// Prints "no letters" and stops when nothing was counted, and likewise skips
/// the pair section with its own message when no file had two letters.
///
/// # Errors
///
/// Only failures to write to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    folder: &Path,
    stats: &LetterStats,
    num_letters: usize,
    num_pairs: usize,
) -> io::Result<()> {
    if stats.letters.is_empty() {
        return writeln!(out, "{}", ScanError::NoLetters);
    }

    writeln!(out, "\nMost common single letters in {}:", folder.display())?;
    write_top_entries(out, &stats.letters, num_letters)?;
    writeln!(out, "Total letters counted: {}", stats.total_letters())?;

    if stats.pairs.is_empty() {
        return writeln!(out, "No two-letter combinations found in the text files.");
    }

    writeln!(
        out,
        "\nMost common two-letter combinations in {}:",
        folder.display()
    )?;
    write_top_entries(out, &stats.pairs, num_pairs)?;
    writeln!(
        out,
        "Total two-letter combinations counted: {}",
        stats.total_pairs()
    )
}
