//! Classifier self-check
//!
//! A fixed regression run against a known puzzle, executed before any user puzzle.
//! A failure means the classifier itself is broken.

use tracing::debug;

use crate::core::{LetterSet, Rules};
use crate::error::{BuzzError, Result};

/// Letters of the reference puzzle
pub const SELF_CHECK_LETTERS: &str = "RWYKACT";

/// A known outcome for the reference puzzle
#[derive(Debug, Clone, Copy)]
enum Expectation {
    Candidate(&'static str, bool),
    Pangram(&'static str, bool),
    Score(&'static str, u32),
}

const EXPECTATIONS: &[Expectation] = &[
    Expectation::Candidate("foo", false),
    Expectation::Candidate("act", false),
    Expectation::Candidate("tact", false),
    Expectation::Candidate("rack", true),
    Expectation::Candidate("tart", true),
    Expectation::Candidate("attar", true),
    Expectation::Candidate("tract", true),
    Expectation::Candidate("trackway", true),
    Expectation::Pangram("attract", false),
    Expectation::Pangram("trackway", true),
    Expectation::Score("rack", 1),
    Expectation::Score("tract", 5),
    Expectation::Score("trackway", 15),
];

impl Expectation {
    /// Compare against the classifier, describing any mismatch
    fn verify(self, rules: &Rules, letter_set: &LetterSet) -> std::result::Result<(), String> {
        match self {
            Self::Candidate(word, expected) => {
                let actual = rules.is_candidate_word(letter_set, word);
                if actual == expected {
                    Ok(())
                } else {
                    Err(format!("is_candidate_word({word}) = {actual}, expected {expected}"))
                }
            }
            Self::Pangram(word, expected) => {
                let actual = letter_set.is_pangram(word);
                if actual == expected {
                    Ok(())
                } else {
                    Err(format!("is_pangram({word}) = {actual}, expected {expected}"))
                }
            }
            Self::Score(word, expected) => {
                let actual = rules.score(letter_set, word);
                if actual == expected {
                    Ok(())
                } else {
                    Err(format!("score({word}) = {actual}, expected {expected}"))
                }
            }
        }
    }
}

/// Run the reference checks under the standard rules
///
/// Returns the number of checks that passed.
///
/// # Errors
///
/// Returns `SelfCheck` describing the first mismatch.
pub fn run_self_check() -> Result<usize> {
    run_checks(&Rules::STANDARD, EXPECTATIONS)
}

/// Verify each expectation in order, stopping at the first mismatch
fn run_checks(rules: &Rules, expectations: &[Expectation]) -> Result<usize> {
    let letter_set: LetterSet = SELF_CHECK_LETTERS.parse()?;

    for expectation in expectations {
        expectation
            .verify(rules, &letter_set)
            .map_err(BuzzError::SelfCheck)?;
    }

    debug!(checks = expectations.len(), "self-check passed");
    Ok(expectations.len())
}
