//! Game rules
//!
//! The scoring and length rules of the puzzle, held as plain values so alternate
//! rule sets can be passed to the solver and reporter.

/// Rules used to accept and score words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Words shorter than this are never answers
    pub min_word_length: usize,
    /// Extra points for a word that uses every puzzle letter
    pub pangram_bonus: u32,
    /// Points for a word of exactly `min_word_length` letters
    pub min_length_points: u32,
}

impl Rules {
    /// The published Spelling Bee rules
    pub const STANDARD: Self = Self {
        min_word_length: 4,
        pangram_bonus: 7,
        min_length_points: 1,
    };
}

impl Default for Rules {
    fn default() -> Self {
        Self::STANDARD
    }
}
