//! Letter and letter-pair frequency statistics over a directory of `.txt` files.
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, run, run_with_output};
pub use config::AnalysisConfig;
pub use crate::core::analysis::analyze;
pub use crate::core::scanner::letters::{filtered_letters, letter_pairs};
pub use crate::core::scanner::{CorpusScan, list_text_files, scan_corpus};
pub use error::ScanError;
pub use models::{FrequencyTable, LetterStats};
pub use utils::write_report;
