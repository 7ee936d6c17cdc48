// src/config.rs
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_FOLDER: &str = "corpus";
pub const DEFAULT_NUM_LETTERS: usize = 26;
pub const DEFAULT_NUM_PAIRS: usize = 50;

/// What to scan and how many ranked entries to print.
///
/// Can be loaded from a TOML file holding any subset of the fields:
///
/// ```toml
/// folder_path = "texts"
/// num_letters = 10
/// num_pairs = 20
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub folder_path: PathBuf,
    pub num_letters: usize,
    pub num_pairs: usize,
}

impl Default for AnalysisConfig {
    #[inline]
    fn default() -> Self {
        Self {
            folder_path: PathBuf::from(DEFAULT_FOLDER),
            num_letters: DEFAULT_NUM_LETTERS,
            num_pairs: DEFAULT_NUM_PAIRS,
        }
    }
}

impl AnalysisConfig {
    #[inline]
    #[must_use]
    pub fn new(folder_path: impl Into<PathBuf>) -> Self {
        Self {
            folder_path: folder_path.into(),
            ..Self::default()
        }
    }

    /// Parses a config from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails on invalid TOML, unknown keys, or values rejected by
    /// [`AnalysisConfig::validate`].
    #[inline]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or [`AnalysisConfig::from_toml_str`]
    /// rejects its content.
    #[inline]
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Both ranking limits must be positive.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first limit that is zero.
    #[inline]
    pub fn validate(&self) -> Result<()> {
        if self.num_letters == 0 {
            bail!("num_letters must be at least 1");
        }
        if self.num_pairs == 0 {
            bail!("num_pairs must be at least 1");
        }
        Ok(())
    }
}
