// src/models/letter_stats.rs
use crate::core::scanner::letters::{filtered_letters, letter_pairs};
use crate::models::FrequencyTable;

/// Letter and letter-pair tallies accumulated over one corpus scan.
#[derive(Debug, Default, Clone)]
pub struct LetterStats {
    pub letters: FrequencyTable<char>,
    pub pairs: FrequencyTable<String>,
    pub files_scanned: u64,
    pub files_with_letters: u64,
}

impl LetterStats {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the letters and pairs of one file's text.
    ///
    /// Pairs are formed only inside `text`, so two calls never produce a pair
    /// joining the end of one file with the start of the next.
    #[inline]
    pub fn record_text(&mut self, text: &str) {
        let letters = filtered_letters(text);

        self.files_scanned = self.files_scanned.saturating_add(1);
        if letters.is_empty() {
            return;
        }
        self.files_with_letters = self.files_with_letters.saturating_add(1);

        self.letters.add_all(letters.iter().copied());
        self.pairs.add_all(letter_pairs(&letters));
    }

    #[inline]
    #[must_use]
    pub fn total_letters(&self) -> u64 {
        self.letters.total()
    }

    #[inline]
    #[must_use]
    pub fn total_pairs(&self) -> u64 {
        self.pairs.total()
    }
}
