//! Main Spelling Bee solver interface

use rayon::prelude::*;
use tracing::{debug, info};

use crate::core::{LetterSet, Rules};
use crate::error::Result;

/// Main Spelling Bee solver
///
/// Scans word sources for the answers to a puzzle under a set of rules.
/// Output is always in source order, duplicates included.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    rules: Rules,
}

impl Solver {
    /// Create a new solver with the given rules
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self { rules }
    }

    /// The rules this solver applies
    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Evaluate a single source entry, returning the uppercased answer if accepted
    fn accept(&self, letter_set: &LetterSet, entry: &str) -> Option<String> {
        let word = entry.trim_end();

        // Fast paths ahead of the full check; a large list is mostly rejected here
        if word.chars().count() < self.rules.min_word_length {
            return None;
        }
        if !letter_set.admits_first_letter(word) {
            return None;
        }

        self.rules
            .is_candidate_word(letter_set, word)
            .then(|| word.to_uppercase())
    }

    /// Collect the answers from a word source
    ///
    /// # Examples
    /// ```
    /// use buzzkill::core::LetterSet;
    /// use buzzkill::solver::Solver;
    ///
    /// let set: LetterSet = "RWYKACT".parse().unwrap();
    /// let words = Solver::default().solve(&set, ["tact", "rack", "trackway\n"]);
    /// assert_eq!(words, vec!["RACK", "TRACKWAY"]);
    /// ```
    pub fn solve<I, S>(&self, letter_set: &LetterSet, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scanned = 0usize;
        let accepted: Vec<String> = words
            .into_iter()
            .inspect(|_| scanned += 1)
            .filter_map(|entry| self.accept(letter_set, entry.as_ref()))
            .collect();

        info!(letters = %letter_set, scanned, accepted = accepted.len(), "solved");
        accepted
    }

    /// Collect the answers from a fallible line stream
    ///
    /// # Errors
    ///
    /// Returns the first read error from the stream; no partial result is kept.
    pub fn solve_lines<I>(&self, letter_set: &LetterSet, lines: I) -> Result<Vec<String>>
    where
        I: IntoIterator<Item = Result<String>>,
    {
        let mut accepted = Vec::new();
        let mut scanned = 0usize;

        for line in lines {
            let line = line?;
            scanned += 1;
            if let Some(word) = self.accept(letter_set, &line) {
                accepted.push(word);
            }
        }

        info!(letters = %letter_set, scanned, accepted = accepted.len(), "solved");
        Ok(accepted)
    }

    /// Collect the answers from an in-memory list, evaluating words in parallel
    ///
    /// Produces exactly what [`Solver::solve`] produces for the same input.
    pub fn par_solve<S>(&self, letter_set: &LetterSet, words: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        let accepted: Vec<String> = words
            .par_iter()
            .filter_map(|entry| self.accept(letter_set, entry.as_ref()))
            .collect();

        debug!(
            letters = %letter_set,
            scanned = words.len(),
            accepted = accepted.len(),
            "solved in parallel"
        );
        accepted
    }
}
