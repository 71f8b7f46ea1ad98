//! Phonetic matching of query names against a candidate list.
//!
//! For each query the matcher computes the query's code once, then linearly
//! scans the candidate list, encoding every candidate and collecting the
//! ones whose code is equal. There is no index: the scan repeats per query,
//! which is the right trade for a handful of interactively-supplied names
//! against a modest surname file.
//!
//! The in-memory entry point [`match_queries`] is pure and infallible.
//! [`match_lines`] and [`match_in_file`] additionally consume the candidate
//! source, and fail fast with a [`SourceError`] before any matching begins
//! if the source cannot be produced; a broken source is never reported as
//! an empty match set.
//!
//! # Example
//!
//! ```rust
//! use libsoundex::matching::match_queries;
//!
//! let candidates = ["Smyth", "Jones", "Smithe"];
//! let results = match_queries(["Smith".to_string()], &candidates);
//! assert_eq!(results[0].matches, vec!["Smyth", "Smithe"]);
//! ```

use std::io::BufRead;
use std::path::Path;

use crate::encoding::{encode, Code};

mod source;

pub use source::{collect_candidates, load_candidates, SourceError};

/// The matches found for a single query name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet {
    /// The query name in its original, unmodified form.
    pub query: String,
    /// The query's phonetic code.
    pub code: Code,
    /// Candidates whose code equals the query's, in candidate-list order.
    /// Duplicate candidate lines each appear, in their original positions.
    pub matches: Vec<String>,
}

/// Match each query against an in-memory candidate list.
///
/// Results come back in query order, one [`MatchSet`] per query. Every
/// candidate whose code equals the query's is included, even if textually
/// unrelated; degenerate strings (no letters) all share the code `"0000"`
/// and therefore match each other.
pub fn match_queries<I, C>(queries: I, candidates: &[C]) -> Vec<MatchSet>
where
    I: IntoIterator<Item = String>,
    C: AsRef<str>,
{
    queries
        .into_iter()
        .map(|query| {
            let code = encode(&query);
            let matches = candidates
                .iter()
                .map(AsRef::as_ref)
                .filter(|&candidate| encode(candidate) == code)
                .map(str::to_string)
                .collect();
            MatchSet {
                query,
                code,
                matches,
            }
        })
        .collect()
}

/// Match each query against candidates read from a line-oriented source.
///
/// The source is consumed once, before matching begins; a read failure
/// returns `Err` and no partial results.
pub fn match_lines<I, R>(queries: I, reader: R) -> Result<Vec<MatchSet>, SourceError>
where
    I: IntoIterator<Item = String>,
    R: BufRead,
{
    let candidates = collect_candidates(reader)?;
    Ok(match_queries(queries, &candidates))
}

/// Match each query against candidates read from a file, one per line.
pub fn match_in_file<I>(queries: I, path: &Path) -> Result<Vec<MatchSet>, SourceError>
where
    I: IntoIterator<Item = String>,
{
    let candidates = load_candidates(path)?;
    Ok(match_queries(queries, &candidates))
}
