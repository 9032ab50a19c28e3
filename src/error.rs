//! Error types for buzzkill

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for puzzle parsing, word sources and the self-check
#[derive(Debug, Error)]
pub enum BuzzError {
    /// No puzzle letters were supplied
    #[error("Don't forget to include today's letters!")]
    MissingInput,

    /// The letters do not form a set of exactly seven distinct letters
    #[error("Must include 7 letters! (found {found} distinct)")]
    InvalidLetterCount { found: usize },

    /// A puzzle character is not an ASCII letter
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),

    /// The word list could not be opened or read
    #[error("Cannot read word list {}: {source}", .path.display())]
    WordSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The embedded regression check disagreed with the classifier
    #[error("Self-check failed: {0}")]
    SelfCheck(String),
}

impl BuzzError {
    /// True for mistakes in the user's input, which are answered with a usage message
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::MissingInput | Self::InvalidLetterCount { .. } | Self::InvalidLetter(_)
        )
    }
}

/// Result type alias for buzzkill operations
pub type Result<T> = std::result::Result<T, BuzzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_are_recoverable() {
        assert!(BuzzError::MissingInput.is_usage());
        assert!(BuzzError::InvalidLetterCount { found: 6 }.is_usage());
        assert!(BuzzError::InvalidLetter('1').is_usage());
    }

    #[test]
    fn fatal_errors_are_not_usage() {
        let err = BuzzError::WordSource {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(!err.is_usage());
        assert!(!BuzzError::SelfCheck("rack".to_string()).is_usage());
    }

    #[test]
    fn word_source_message_names_path() {
        let err = BuzzError::WordSource {
            path: PathBuf::from("lists/english.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot read word list lists/english.txt: not found"
        );
    }

    #[test]
    fn letter_count_message() {
        let err = BuzzError::InvalidLetterCount { found: 6 };
        assert_eq!(err.to_string(), "Must include 7 letters! (found 6 distinct)");
    }
}
