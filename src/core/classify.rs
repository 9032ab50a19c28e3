//! Word classification
//!
//! Pure predicates deciding whether a word answers a puzzle, whether it is a pangram,
//! and how many points it is worth.

use super::letters::{LetterSet, WordLetters};
use super::rules::Rules;

impl Rules {
    /// Check whether a word is a valid answer for the letter set
    ///
    /// A word is accepted when it is long enough, starts with a puzzle letter,
    /// contains the required letter and uses no letter outside the puzzle.
    /// Letters may repeat.
    #[must_use]
    pub fn is_candidate_word(&self, letter_set: &LetterSet, word: &str) -> bool {
        if word.chars().count() < self.min_word_length {
            return false;
        }

        if !letter_set.admits_first_letter(word) {
            return false;
        }

        let letters = WordLetters::of(word);
        if !letter_set.has_required(letters) {
            return false;
        }

        letter_set.covers(letters)
    }

    /// Score a word
    ///
    /// Membership is not checked; callers score words already accepted.
    #[must_use]
    pub fn score(&self, letter_set: &LetterSet, word: &str) -> u32 {
        let length = word.chars().count();

        if length < self.min_word_length {
            0
        } else if length == self.min_word_length {
            self.min_length_points
        } else if letter_set.is_pangram(word) {
            length as u32 + self.pangram_bonus
        } else {
            length as u32
        }
    }
}

/// [`Rules::is_candidate_word`] under the standard rules
///
/// # Examples
/// ```
/// use buzzkill::core::{LetterSet, is_candidate_word};
///
/// let set: LetterSet = "RWYKACT".parse().unwrap();
/// assert!(is_candidate_word(&set, "trackway"));
/// assert!(!is_candidate_word(&set, "tact"));
/// ```
#[must_use]
pub fn is_candidate_word(letter_set: &LetterSet, word: &str) -> bool {
    Rules::STANDARD.is_candidate_word(letter_set, word)
}

/// True iff the word uses all seven puzzle letters
#[must_use]
pub fn is_pangram(letter_set: &LetterSet, word: &str) -> bool {
    letter_set.is_pangram(word)
}

/// [`Rules::score`] under the standard rules
#[must_use]
pub fn score(word: &str, letter_set: &LetterSet) -> u32 {
    Rules::STANDARD.score(letter_set, word)
}
