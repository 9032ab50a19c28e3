//! Puzzle letter set
//!
//! A `LetterSet` stores the seven puzzle letters as a 26-bit mask for fast membership
//! checks, along with the required letter and the input order for display.

use std::fmt;
use std::str::FromStr;

use crate::error::{BuzzError, Result};

/// Number of distinct letters in a puzzle
pub const PUZZLE_SIZE: usize = 7;

/// Mask bit for a letter (either case), or `None` for anything outside A-Z
#[inline]
fn letter_bit(ch: char) -> Option<u32> {
    let upper = ch.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| 1 << (u32::from(upper) - u32::from('A')))
}

/// The distinct letters appearing in a word
///
/// Characters outside A-Z are not part of the mask but are remembered, since a
/// word containing one can never be an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordLetters {
    mask: u32,
    foreign: bool,
}

impl WordLetters {
    /// Collect the distinct letters of a word, case-insensitively
    #[must_use]
    pub fn of(word: &str) -> Self {
        word.chars()
            .fold(Self::default(), |acc, ch| match letter_bit(ch) {
                Some(bit) => Self {
                    mask: acc.mask | bit,
                    ..acc
                },
                None => Self {
                    foreign: true,
                    ..acc
                },
            })
    }

    /// Bitmask of letters present (bit 0 = A)
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.mask
    }

    /// Whether the word contains a character that is not an ASCII letter
    #[inline]
    #[must_use]
    pub const fn has_foreign(self) -> bool {
        self.foreign
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.mask.count_ones()
    }
}

/// The seven letters of a puzzle and its required letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: [char; PUZZLE_SIZE],
    mask: u32,
    required: char,
}

impl LetterSet {
    /// Parse raw puzzle input
    ///
    /// Letters are uppercased and deduplicated. The first character of the input is
    /// the required letter.
    ///
    /// # Errors
    /// - `MissingInput` if no letters were given
    /// - `InvalidLetter` if a character is not an ASCII letter
    /// - `InvalidLetterCount` if there are not exactly 7 distinct letters
    ///
    /// # Examples
    /// ```
    /// use buzzkill::core::LetterSet;
    ///
    /// let set = LetterSet::parse(Some("rwykact")).unwrap();
    /// assert_eq!(set.required(), 'R');
    /// assert_eq!(set.to_string(), "RWYKACT");
    ///
    /// assert!(LetterSet::parse(Some("RWYKACR")).is_err());
    /// assert!(LetterSet::parse(None).is_err());
    /// ```
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        let raw = raw.map(str::trim).unwrap_or_default();
        let Some(first) = raw.chars().next() else {
            return Err(BuzzError::MissingInput);
        };

        let mut mask = 0u32;
        let mut seen = Vec::with_capacity(PUZZLE_SIZE);
        for ch in raw.chars() {
            let bit = letter_bit(ch).ok_or(BuzzError::InvalidLetter(ch))?;
            if mask & bit == 0 {
                mask |= bit;
                seen.push(ch.to_ascii_uppercase());
            }
        }

        let found = seen.len();
        let letters: [char; PUZZLE_SIZE] = seen
            .try_into()
            .map_err(|_| BuzzError::InvalidLetterCount { found })?;

        Ok(Self {
            letters,
            mask,
            required: first.to_ascii_uppercase(),
        })
    }

    /// The letters in the order they were first given
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; PUZZLE_SIZE] {
        &self.letters
    }

    /// The letter every answer must contain
    #[inline]
    #[must_use]
    pub const fn required(&self) -> char {
        self.required
    }

    /// Check membership of a letter (either case)
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        letter_bit(ch).is_some_and(|bit| self.mask & bit != 0)
    }

    /// Cheap pre-filter: does the word start with one of the puzzle letters?
    #[inline]
    #[must_use]
    pub fn admits_first_letter(&self, word: &str) -> bool {
        word.chars().next().is_some_and(|ch| self.contains(ch))
    }

    /// Whether the word's letters include the required letter
    #[inline]
    #[must_use]
    pub fn has_required(&self, letters: WordLetters) -> bool {
        letter_bit(self.required).is_some_and(|bit| letters.mask() & bit != 0)
    }

    /// Whether every letter of the word is a puzzle letter
    #[inline]
    #[must_use]
    pub const fn covers(&self, letters: WordLetters) -> bool {
        !letters.has_foreign() && letters.mask() & !self.mask == 0
    }

    /// True iff the word uses every puzzle letter at least once
    ///
    /// Letters outside the puzzle do not matter here; only the superset relation is
    /// checked.
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        WordLetters::of(word).mask() & self.mask == self.mask
    }
}

impl FromStr for LetterSet {
    type Err = BuzzError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bee() -> LetterSet {
        LetterSet::parse(Some("RWYKACT")).unwrap()
    }

    #[test]
    fn parse_valid() {
        let set = bee();
        assert_eq!(set.letters(), &['R', 'W', 'Y', 'K', 'A', 'C', 'T']);
        assert_eq!(set.required(), 'R');
    }

    #[test]
    fn parse_is_case_insensitive() {
        let lower = LetterSet::parse(Some("rwykact")).unwrap();
        let mixed = LetterSet::parse(Some("rWyKaCt")).unwrap();
        assert_eq!(lower, bee());
        assert_eq!(mixed, bee());
        assert_eq!(lower.required(), 'R');
    }

    #[test]
    fn required_letter_is_first_character() {
        let set = LetterSet::parse(Some("TRWYKAC")).unwrap();
        assert_eq!(set.required(), 'T');
        assert!(set.contains('r'));
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let set = LetterSet::parse(Some("  rwykact\n")).unwrap();
        assert_eq!(set, bee());
    }

    #[test]
    fn parse_missing_input() {
        assert!(matches!(LetterSet::parse(None), Err(BuzzError::MissingInput)));
        assert!(matches!(
            LetterSet::parse(Some("")),
            Err(BuzzError::MissingInput)
        ));
        assert!(matches!(
            LetterSet::parse(Some("   ")),
            Err(BuzzError::MissingInput)
        ));
    }

    #[test]
    fn parse_duplicate_letters() {
        assert!(matches!(
            LetterSet::parse(Some("RWYKACR")),
            Err(BuzzError::InvalidLetterCount { found: 6 })
        ));
    }

    #[test]
    fn parse_wrong_length() {
        assert!(matches!(
            LetterSet::parse(Some("RWY")),
            Err(BuzzError::InvalidLetterCount { found: 3 })
        ));
        assert!(matches!(
            LetterSet::parse(Some("RWYKACTBE")),
            Err(BuzzError::InvalidLetterCount { found: 9 })
        ));
    }

    #[test]
    fn parse_eight_chars_seven_distinct() {
        let set = LetterSet::parse(Some("RWYKACTT")).unwrap();
        assert_eq!(set, bee());
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert!(matches!(
            LetterSet::parse(Some("RWYKAC1")),
            Err(BuzzError::InvalidLetter('1'))
        ));
        assert!(matches!(
            LetterSet::parse(Some("RWY KACT")),
            Err(BuzzError::InvalidLetter(' '))
        ));
    }

    #[test]
    fn from_str_matches_parse() {
        let set: LetterSet = "rwykact".parse().unwrap();
        assert_eq!(set, bee());
    }

    #[test]
    fn display_keeps_input_order() {
        let set = LetterSet::parse(Some("tRwykac")).unwrap();
        assert_eq!(format!("{set}"), "TRWYKAC");
    }

    #[test]
    fn contains_is_case_insensitive() {
        let set = bee();
        assert!(set.contains('r'));
        assert!(set.contains('R'));
        assert!(!set.contains('z'));
        assert!(!set.contains('-'));
    }

    #[test]
    fn admits_first_letter() {
        let set = bee();
        assert!(set.admits_first_letter("rack"));
        assert!(set.admits_first_letter("Tract"));
        assert!(!set.admits_first_letter("foo"));
        assert!(!set.admits_first_letter(""));
    }

    #[test]
    fn word_letters_distinct() {
        let letters = WordLetters::of("attar");
        assert_eq!(letters.count(), 3);
        assert!(!letters.has_foreign());

        let letters = WordLetters::of("don't");
        assert_eq!(letters.count(), 4);
        assert!(letters.has_foreign());
    }

    #[test]
    fn covers_and_required() {
        let set = bee();
        assert!(set.covers(WordLetters::of("tact")));
        assert!(!set.has_required(WordLetters::of("tact")));
        assert!(set.has_required(WordLetters::of("rack")));
        assert!(!set.covers(WordLetters::of("rock")));
        assert!(!set.covers(WordLetters::of("rack's")));
    }

    #[test]
    fn pangram_superset() {
        let set = bee();
        assert!(set.is_pangram("trackway"));
        assert!(set.is_pangram("TRACKWAYS")); // extra letters do not matter
        assert!(!set.is_pangram("attract"));
        assert!(!set.is_pangram(""));
    }
}
