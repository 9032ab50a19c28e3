//! Display functions for command results

use super::formatters::{group_heading, group_words, stats_line, usage_text};
use crate::core::LetterSet;
use crate::report::{GroupKey, Report};
use colored::Colorize;

/// Print the start of the self-check
pub fn print_self_check_start() {
    println!("{}", "TESTING...".bright_black());
}

/// Print a successful self-check
pub fn print_self_check_passed(checks: usize) {
    println!("{} ({checks} checks)\n", "Tests passed!".green());
}

/// Print the solving banner
pub fn print_banner(letter_set: &LetterSet) {
    println!(
        "Solving for {} [requires: {}]",
        letter_set.to_string().bright_yellow().bold(),
        letter_set.required().to_string().bright_yellow().bold()
    );
}

/// Print the grouped report and its stats
pub fn print_report(report: &Report) {
    println!("\n{}", "─".repeat(60).cyan());

    for group in report.groups() {
        let heading = group_heading(group);
        let heading = match group.key {
            GroupKey::Pangrams => heading.bright_magenta().bold(),
            GroupKey::Letter(_) => heading.bright_cyan().bold(),
        };
        println!("{heading}");
        println!("   {}", group_words(group));
    }

    println!("{}", "─".repeat(60).cyan());
    println!("{}", stats_line(report.stats()).bright_yellow().bold());
}

/// Print the usage message for a puzzle input mistake
pub fn print_usage(message: &str) {
    println!("{}", usage_text(message));
}
