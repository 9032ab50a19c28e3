//! Word list loading utilities
//!
//! A word list file is newline-delimited text with one word per line, read lazily one
//! line at a time.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BuzzError, Result};

/// Where candidate words come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// The dictionary compiled into the binary
    #[default]
    Bundled,
    /// A word list file on disk
    File(PathBuf),
}

impl WordSource {
    /// Pick the source named on the command line, falling back to the bundled list
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        arg.map_or(Self::Bundled, |path| Self::File(PathBuf::from(path)))
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "bundled dictionary"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Lines of a word list file, yielded in order
///
/// The file handle is released when the iterator is dropped.
pub struct WordLines {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
}

impl Iterator for WordLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| {
            line.map_err(|source| BuzzError::WordSource {
                path: self.path.clone(),
                source,
            })
        })
    }
}

/// Open a word list file for a single pass over its lines
///
/// # Errors
///
/// Returns `WordSource` if the file cannot be opened.
///
/// # Examples
/// ```no_run
/// use buzzkill::wordlists::loader::read_lines;
///
/// for line in read_lines("data/words.txt").unwrap() {
///     println!("{}", line.unwrap());
/// }
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<WordLines> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BuzzError::WordSource {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened word list");

    Ok(WordLines {
        path: path.to_path_buf(),
        lines: BufReader::new(file).lines(),
    })
}
