//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_report, print_self_check_passed, print_self_check_start, print_usage,
};
