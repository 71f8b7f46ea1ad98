//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level argument parser.
#[derive(Parser)]
#[command(name = "libsoundex")]
#[command(about = "Phonetic surname search with a fixed-length Soundex variant")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Match names against a candidate file
    Search {
        /// Names to search for
        #[arg(required = true)]
        names: Vec<String>,

        /// Candidate file, one name per line (defaults to the configured file)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Show each query's phonetic code alongside its matches
        #[arg(short = 's', long)]
        show_codes: bool,
    },

    /// Print the phonetic code for each name
    Encode {
        /// Names to encode
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Display candidate file statistics
    Info {
        /// Candidate file, one name per line (defaults to the configured file)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show or update user settings
    Settings {
        /// Set the default candidate file path
        #[arg(long)]
        set_file: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Launch interactive REPL
    Repl {
        /// Candidate file to load
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
