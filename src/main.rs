//! Spelling Bee Solver - CLI
//!
//! Runs the classifier self-check, then solves the puzzle given on the command line.

use anyhow::{Context, Result};
use buzzkill::{
    commands::{SolveConfig, find_words, parse_letters, run_self_check},
    output::{
        print_banner, print_report, print_self_check_passed, print_self_check_start, print_usage,
    },
    report::build_report,
    solver::Solver,
    wordlists::WordSource,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "buzzkill",
    about = "Solves the daily Spelling Bee: every answer, every pangram, the maximum score",
    version,
    author
)]
struct Cli {
    /// The 7 puzzle letters, required letter first (e.g. RWYKACT)
    letters: Option<String>,

    /// Word list file, one word per line (default: bundled dictionary)
    wordlist: Option<String>,
}

/// Log to stderr, filtered by `RUST_LOG` (warnings by default)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    print_self_check_start();
    let checks = run_self_check().context("classifier self-check")?;
    print_self_check_passed(checks);

    let config = SolveConfig::new(cli.letters, WordSource::from_arg(cli.wordlist.as_deref()));
    let letter_set = match parse_letters(&config) {
        Ok(letter_set) => letter_set,
        Err(err) if err.is_usage() => {
            print_usage(&err.to_string());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    print_banner(&letter_set);

    let solver = Solver::default();
    let accepted = find_words(&solver, &letter_set, &config.source)
        .with_context(|| format!("solving {letter_set} from {}", config.source))?;

    let report = build_report(solver.rules(), &letter_set, &accepted);
    print_report(&report);

    Ok(())
}
