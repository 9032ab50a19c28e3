//! Puzzle reports
//!
//! Groups accepted words by first letter, pulls out the pangrams and totals the
//! score. A report is a read-only view built from the solver's output.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::core::{LetterSet, Rules};

/// Key of a word group
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    /// Every accepted pangram
    Pangrams,
    /// Accepted words starting with this letter
    Letter(char),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pangrams => write!(f, "PANGRAMS"),
            Self::Letter(letter) => write!(f, "{letter}"),
        }
    }
}

/// A named group of accepted words, in solver order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGroup {
    pub key: GroupKey,
    pub words: Vec<String>,
}

impl WordGroup {
    /// Number of words in the group
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }
}

/// Summary numbers for a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub pangram_count: usize,
    pub total_count: usize,
    /// Sum of the scores of every accepted word
    pub max_score: u32,
}

/// Grouped and scored answers to a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pangrams: WordGroup,
    letter_groups: Vec<WordGroup>,
    stats: Stats,
}

impl Report {
    /// The pangram group
    #[must_use]
    pub const fn pangrams(&self) -> &WordGroup {
        &self.pangrams
    }

    /// Groups by first letter, sorted by letter
    ///
    /// Only letters that start at least one accepted word have a group.
    #[must_use]
    pub fn letter_groups(&self) -> &[WordGroup] {
        &self.letter_groups
    }

    /// All groups: pangrams first, then each letter
    pub fn groups(&self) -> impl Iterator<Item = &WordGroup> {
        std::iter::once(&self.pangrams).chain(&self.letter_groups)
    }

    /// Look up a group by key
    #[must_use]
    pub fn group(&self, key: GroupKey) -> Option<&WordGroup> {
        self.groups().find(|group| group.key == key)
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }
}

/// Build the report for the accepted words of a puzzle
///
/// # Examples
/// ```
/// use buzzkill::core::{LetterSet, Rules};
/// use buzzkill::report::{GroupKey, build_report};
///
/// let set: LetterSet = "RWYKACT".parse().unwrap();
/// let accepted = vec!["RACK".to_string(), "TRACKWAY".to_string()];
/// let report = build_report(&Rules::default(), &set, &accepted);
///
/// assert_eq!(report.stats().max_score, 16);
/// assert_eq!(report.group(GroupKey::Pangrams).unwrap().count(), 1);
/// ```
#[must_use]
pub fn build_report(rules: &Rules, letter_set: &LetterSet, accepted: &[String]) -> Report {
    let pangrams: Vec<String> = accepted
        .iter()
        .filter(|word| letter_set.is_pangram(word))
        .cloned()
        .collect();

    let mut by_letter: FxHashMap<char, Vec<String>> = FxHashMap::default();
    for word in accepted {
        if let Some(first) = word.chars().next() {
            by_letter
                .entry(first.to_ascii_uppercase())
                .or_default()
                .push(word.clone());
        }
    }

    let mut letter_groups: Vec<WordGroup> = by_letter
        .into_iter()
        .map(|(letter, words)| WordGroup {
            key: GroupKey::Letter(letter),
            words,
        })
        .collect();
    letter_groups.sort_unstable_by_key(|group| group.key);

    let stats = Stats {
        pangram_count: pangrams.len(),
        total_count: accepted.len(),
        max_score: accepted
            .iter()
            .map(|word| rules.score(letter_set, word))
            .sum(),
    };

    Report {
        pangrams: WordGroup {
            key: GroupKey::Pangrams,
            words: pangrams,
        },
        letter_groups,
        stats,
    }
}
