//! CLI interface for libsoundex
//!
//! Provides command-line utilities for encoding names and searching
//! candidate files for phonetic matches.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands};
pub use paths::{config_dir, PersistentConfig};
