//! Puzzle solving command
//!
//! Parses the puzzle letters, scans the word source and builds the report.

use crate::core::LetterSet;
use crate::error::Result;
use crate::report::{Report, build_report};
use crate::solver::Solver;
use crate::wordlists::loader::read_lines;
use crate::wordlists::{WORDS, WordSource};

/// Configuration for solving a puzzle
#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    pub letters: Option<String>,
    pub source: WordSource,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(letters: Option<String>, source: WordSource) -> Self {
        Self { letters, source }
    }
}

/// Result of solving a puzzle
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub letter_set: LetterSet,
    pub accepted: Vec<String>,
    pub report: Report,
}

/// Parse the puzzle letters from the configuration
///
/// # Errors
///
/// Returns a usage error if the letters are missing or malformed.
pub fn parse_letters(config: &SolveConfig) -> Result<LetterSet> {
    LetterSet::parse(config.letters.as_deref())
}

/// Scan a word source for the answers to a puzzle
///
/// The bundled dictionary is scanned in parallel; files are streamed line by line.
///
/// # Errors
///
/// Returns `WordSource` if a word list file cannot be opened or read.
pub fn find_words(
    solver: &Solver,
    letter_set: &LetterSet,
    source: &WordSource,
) -> Result<Vec<String>> {
    match source {
        WordSource::Bundled => Ok(solver.par_solve(letter_set, WORDS)),
        WordSource::File(path) => solver.solve_lines(letter_set, read_lines(path)?),
    }
}

/// Solve a puzzle end to end
///
/// # Errors
///
/// Returns an error if:
/// - The letters are missing or do not form a 7 letter set
/// - The word source cannot be read
pub fn solve_puzzle(config: &SolveConfig, solver: &Solver) -> Result<SolveOutcome> {
    let letter_set = parse_letters(config)?;
    let accepted = find_words(solver, &letter_set, &config.source)?;
    let report = build_report(solver.rules(), &letter_set, &accepted);

    Ok(SolveOutcome {
        letter_set,
        accepted,
        report,
    })
}
