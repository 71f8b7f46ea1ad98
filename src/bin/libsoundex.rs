//! libsoundex - phonetic surname search
//!
//! Provides CLI utilities and an interactive REPL for matching names
//! against a candidate file by phonetic code.

use clap::Parser;
use colored::Colorize;
use std::process;

use libsoundex::cli::commands;
use libsoundex::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Repl { file } => libsoundex::repl::run(file),
        _ => commands::execute(cli.command),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}
