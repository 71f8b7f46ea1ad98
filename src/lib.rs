//! # libsoundex
//!
//! Phonetic surname search using a fixed-length Soundex variant.
//!
//! This library encodes names into four-digit phonetic codes and finds
//! phonetically-similar names in a candidate list by comparing codes. The
//! encoding is a modified Soundex: the leading letter is not retained and
//! the letter equivalence classes differ from the classic tables.
//!
//! ## Example
//!
//! ```rust
//! use libsoundex::prelude::*;
//!
//! let candidates = ["Smyth", "Jones", "Smithe"];
//! for set in match_queries(["Smith".to_string()], &candidates) {
//!     println!("{}: {}", set.query, set.matches.join(", "));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod matching;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Interactive REPL for phonetic name search
#[cfg(feature = "cli")]
pub mod repl;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::encoding::{encode, Code, SoundClass};
    pub use crate::matching::{
        collect_candidates, load_candidates, match_in_file, match_lines, match_queries, MatchSet,
        SourceError,
    };
}
