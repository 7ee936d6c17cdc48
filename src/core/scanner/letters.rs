// src/core/scanner/letters.rs

/// Lowercases `text` and keeps only the ASCII letters `a` to `z`, in order.
///
/// Lowercasing runs over the full Unicode text first, so characters such as
/// the Kelvin sign that lowercase to an ASCII letter are counted. Everything
/// else is dropped and does not break letter adjacency.
#[inline]
#[must_use]
pub fn filtered_letters(text: &str) -> Vec<char> {
    text.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Adjacent pairs of a filtered-letter sequence as two-character strings.
///
/// A sequence of length `n` yields `n - 1` pairs, none for `n < 2`.
#[inline]
pub fn letter_pairs(letters: &[char]) -> impl Iterator<Item = String> + '_ {
    letters.windows(2).map(|window| window.iter().collect())
}
