//! Candidate source acquisition.
//!
//! Candidates arrive one per line from an external source, usually a
//! surname file. The source is consumed exactly once, up front; a source
//! that cannot be opened or read surfaces as a [`SourceError`] instead of
//! an empty candidate list. Lines are taken verbatim (a blank line is a
//! legitimate degenerate candidate).

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while acquiring the candidate sequence.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The candidate source could not be opened.
    #[error("candidate source {} is unavailable: {source}", .path.display())]
    Unavailable {
        /// Path of the source that could not be opened.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// The candidate source failed partway through being read.
    #[error("candidate source could not be read: {0}")]
    Unreadable(#[from] io::Error),
}

/// A specialized `Result` type for candidate source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Collect candidate strings from a line-oriented reader.
///
/// A failure on any line aborts the whole collection; no partial candidate
/// list is ever returned.
pub fn collect_candidates<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        candidates.push(line?);
    }
    Ok(candidates)
}

/// Open a candidate file and collect its lines.
pub fn load_candidates(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    collect_candidates(BufReader::new(file))
}
