// src/cli.rs
use anyhow::{Context as _, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::AnalysisConfig;
use crate::core::analysis::analyze;
use crate::error::ScanError;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory of .txt files to scan [default: corpus]
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Number of single letters to show [default: 26]
    #[arg(short, long)]
    pub letters: Option<usize>,

    /// Number of two-letter combinations to show [default: 50]
    #[arg(short, long)]
    pub pairs: Option<usize>,

    /// TOML file with folder_path, num_letters and num_pairs
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the effective config: defaults, then the config file, then flags.
    ///
    /// # Errors
    ///
    /// Fails when the config file cannot be loaded or a limit is zero.
    pub fn resolve_config(&self) -> Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::from_toml_file(path)?,
            None => AnalysisConfig::default(),
        };

        if let Some(directory) = &self.directory {
            config.folder_path.clone_from(directory);
        }
        if let Some(letters) = self.letters {
            config.num_letters = letters;
        }
        if let Some(pairs) = self.pairs {
            config.num_pairs = pairs;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Runs one analysis with the given arguments, printing to stdout.
///
/// # Errors
///
/// See [`run_with_output`].
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out)?;
    out.flush().context("Failed to flush stdout")
}

/// Runs one analysis with the given arguments, writing every line to `out`.
///
/// A folder that is missing or not a directory is reported without starting
/// the analysis at all.
///
/// # Errors
///
/// Config problems and failures to write to `out`. Scan problems are
/// written and still return `Ok`.
pub fn run_with_output<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let config = args.resolve_config()?;
    log::info!(
        "Analyzing {} (top {} letters, top {} pairs)",
        config.folder_path.display(),
        config.num_letters,
        config.num_pairs
    );

    if !config.folder_path.is_dir() {
        log::debug!("{} is not a directory", config.folder_path.display());
        writeln!(out, "{}", ScanError::InvalidDirectory(config.folder_path))
            .context("Failed to write output")?;
        return Ok(());
    }

    analyze(&config, out).context("Failed to write report")
}
