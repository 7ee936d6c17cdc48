// src/models.rs
pub mod frequency_table;
pub mod letter_stats;

pub use frequency_table::FrequencyTable;
pub use letter_stats::LetterStats;
