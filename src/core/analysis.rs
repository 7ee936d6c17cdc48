// src/core/analysis.rs
use std::io::{self, Write};

use crate::config::AnalysisConfig;
use crate::core::scanner::scan_corpus;
use crate::utils::write_report;

/// Scans `config.folder_path` and writes the full letter report to `out`.
///
/// Every scan outcome, failures included, ends up as text in `out`: a
/// directory problem or an empty directory is a single line, unreadable files
/// each get a line before the report, and the report itself follows.
///
/// # Errors
///
/// Only failures to write to `out`. Scan errors are reported, not returned.
#[inline]
pub fn analyze<W: Write>(config: &AnalysisConfig, out: &mut W) -> io::Result<()> {
    let scan = match scan_corpus(&config.folder_path) {
        Ok(scan) => scan,
        Err(err) => {
            if !err.is_empty_result() {
                log::debug!("Analysis of {} stopped: {err:?}", config.folder_path.display());
            }
            return writeln!(out, "{err}");
        }
    };

    for failure in &scan.failures {
        writeln!(out, "{failure}")?;
    }

    write_report(
        out,
        &config.folder_path,
        &scan.stats,
        config.num_letters,
        config.num_pairs,
    )
}
