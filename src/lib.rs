//! Spelling Bee Solver
//!
//! Finds every answer to a Spelling Bee puzzle in a word list, picks out the pangrams
//! and totals the maximum score.
//!
//! # Quick Start
//!
//! ```rust
//! use buzzkill::core::LetterSet;
//! use buzzkill::report::build_report;
//! use buzzkill::solver::Solver;
//!
//! // Required letter first
//! let letters: LetterSet = "RWYKACT".parse().unwrap();
//!
//! let solver = Solver::default();
//! let words = solver.solve(&letters, ["rack", "tact", "tract", "trackway"]);
//! let report = build_report(solver.rules(), &letters, &words);
//!
//! assert_eq!(report.stats().total_count, 3);
//! assert_eq!(report.stats().max_score, 21);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Solving
pub mod solver;

// Grouping and scoring of answers
pub mod report;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
