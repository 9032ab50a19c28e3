//! Command implementations

pub mod self_check;
pub mod solve;

pub use self_check::{SELF_CHECK_LETTERS, run_self_check};
pub use solve::{SolveConfig, SolveOutcome, find_words, parse_letters, solve_puzzle};
