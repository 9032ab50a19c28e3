//! Core domain types for Spelling Bee
//!
//! This module contains the puzzle letter set, the game rules and the word classifier.
//! Everything here is pure: no I/O, no shared state.

mod classify;
mod letters;
mod rules;

pub use classify::{is_candidate_word, is_pangram, score};
pub use letters::{LetterSet, PUZZLE_SIZE, WordLetters};
pub use rules::Rules;
