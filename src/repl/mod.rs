//! Interactive REPL for phonetic name search
//!
//! A small Read-Eval-Print Loop around the matcher. Each line is a match
//! request in the combined `Name1 Name2 < surnames.txt` syntax, or one of a
//! handful of session commands (`help`, `file <path>`, `exit`). Once a
//! candidate file has been named, later requests may omit the `< file` part.

pub mod command;

pub use command::{parse_request, ReplInput};

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use crate::cli::paths::PersistentConfig;
use crate::matching::match_in_file;

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "libsoundex> ".to_string(),
            history_file: Some(
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".libsoundex_history"),
            ),
        }
    }
}

fn print_banner() {
    println!("{}", "libsoundex - phonetic surname search".bold());
    println!("Enter surnames separated by spaces, then the candidate file after a < symbol");
    println!("E.g. {}", "Name1 Name2 < surnames.txt".cyan());
    println!("Type {} for commands, {} to leave\n", "help".cyan(), "exit".cyan());
}

fn print_help() {
    println!("  <names...> [< file]   match names against the candidate file");
    println!("  file <path>           set the session candidate file");
    println!("  help                  show this help");
    println!("  exit | quit           leave the REPL");
}

/// Run the interactive REPL.
///
/// `initial_file` seeds the session candidate file; when absent, the
/// configured default is used until a request or `file` command names one.
pub fn run(initial_file: Option<PathBuf>) -> Result<()> {
    let config = ReplConfig::default();
    let mut session_file = initial_file.or_else(|| {
        PersistentConfig::load()
            .unwrap_or_default()
            .names_file
    });

    print_banner();
    if let Some(path) = &session_file {
        println!("Candidate file: {}\n", path.display());
    }

    let mut editor = DefaultEditor::new()?;
    if let Some(history) = &config.history_file {
        // A missing history file is fine on first run.
        let _ = editor.load_history(history);
    }

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                match parse_request(&line) {
                    ReplInput::Empty => {}
                    ReplInput::Exit => break,
                    ReplInput::Help => print_help(),
                    ReplInput::File(path) => {
                        println!("Candidate file: {}", path.display());
                        session_file = Some(path);
                    }
                    ReplInput::Request { queries, file } => {
                        if let Some(path) = &file {
                            session_file = Some(path.clone());
                        }
                        run_request(queries, session_file.as_deref());
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(history) = &config.history_file {
        let _ = editor.save_history(history);
    }

    Ok(())
}

fn run_request(queries: Vec<String>, file: Option<&std::path::Path>) {
    let Some(path) = file else {
        eprintln!(
            "{}: no candidate file; name one with `< file` or `file <path>`",
            "Error".red().bold()
        );
        return;
    };

    match match_in_file(queries, path) {
        Ok(results) => {
            for set in results {
                println!("{}: {}", set.query.bold(), set.matches.join(", "));
            }
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
        }
    }
}
