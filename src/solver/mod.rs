//! Spelling Bee solving
//!
//! Scans a word source and collects the answers to a puzzle.

mod engine;

pub use engine::Solver;
