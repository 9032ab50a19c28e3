//! Formatting utilities for terminal output

use crate::report::{Stats, WordGroup};

/// Format the usage message shown for bad puzzle input
#[must_use]
pub fn usage_text(message: &str) -> String {
    format!(
        "> {message}

Usage:

  buzzkill [7 letters, required letter first] [word list file]

Example:

  buzzkill RWYKACT
"
    )
}

/// Format a group heading with its word count, e.g. `A (2)`
#[must_use]
pub fn group_heading(group: &WordGroup) -> String {
    format!("{} ({})", group.key, group.count())
}

/// Join group members for a single line of output
#[must_use]
pub fn group_words(group: &WordGroup) -> String {
    if group.words.is_empty() {
        "-".to_string()
    } else {
        group.words.join(", ")
    }
}

/// Format the summary line
#[must_use]
pub fn stats_line(stats: &Stats) -> String {
    format!(
        "Pangrams: {} | Words: {} | Max score: {}",
        stats.pangram_count, stats.total_count, stats.max_score
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::GroupKey;

    fn group(key: GroupKey, words: &[&str]) -> WordGroup {
        WordGroup {
            key,
            words: words.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    #[test]
    fn usage_includes_message() {
        let text = usage_text("Must include 7 letters!");
        assert!(text.starts_with("> Must include 7 letters!\n"));
        assert!(text.contains("buzzkill RWYKACT"));
    }

    #[test]
    fn heading_shows_count() {
        let g = group(GroupKey::Letter('T'), &["TRACT", "TART"]);
        assert_eq!(group_heading(&g), "T (2)");

        let p = group(GroupKey::Pangrams, &["TRACKWAY"]);
        assert_eq!(group_heading(&p), "PANGRAMS (1)");
    }

    #[test]
    fn words_joined() {
        let g = group(GroupKey::Letter('T'), &["TRACT", "TART"]);
        assert_eq!(group_words(&g), "TRACT, TART");
    }

    #[test]
    fn empty_group_placeholder() {
        let g = group(GroupKey::Pangrams, &[]);
        assert_eq!(group_words(&g), "-");
    }

    #[test]
    fn stats_summary() {
        let stats = Stats {
            pangram_count: 1,
            total_count: 21,
            max_score: 77,
        };
        assert_eq!(
            stats_line(&stats),
            "Pangrams: 1 | Words: 21 | Max score: 77"
        );
    }
}
