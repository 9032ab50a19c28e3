//! Word lists for Spelling Bee solving
//!
//! Provides the bundled American English dictionary compiled into the binary and a
//! lazy reader for word list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{WordLines, WordSource, read_lines};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_trimmed_lowercase() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn bundled_list_is_a_full_dictionary() {
        assert!(WORDS_COUNT > 50_000, "only {WORDS_COUNT} bundled words");
    }

    #[test]
    fn bundled_list_is_sorted_and_unique() {
        assert!(WORDS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn bundled_list_has_known_answers() {
        for answer in ["rack", "tart", "attar", "tract", "wart", "lotion", "artery"] {
            assert!(WORDS.contains(&answer), "'{answer}' missing from bundled list");
        }
    }
}
