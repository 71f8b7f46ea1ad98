//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use rustc_hash::FxHashMap;
use std::path::PathBuf;

use crate::encoding::{encode, Code};
use crate::matching::{load_candidates, match_queries};

use super::args::Commands;
use super::paths::{config_file_path, PersistentConfig};

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Repl { .. } => {
            // Handled in main.rs
            unreachable!("REPL command should be handled in main");
        }
        Commands::Search {
            names,
            file,
            show_codes,
        } => cmd_search(names, file, show_codes),
        Commands::Encode { names } => cmd_encode(&names),
        Commands::Info { file } => cmd_info(file),
        Commands::Settings { set_file, reset } => cmd_settings(set_file, reset),
    }
}

/// Resolve the candidate file: explicit flag first, configured default second.
fn resolve_names_file(file: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = file {
        return Ok(path);
    }
    let config = PersistentConfig::load().unwrap_or_default();
    config.names_file.context(
        "no candidate file given; pass --file or set a default with `settings --set-file`",
    )
}

/// Search command
fn cmd_search(names: Vec<String>, file: Option<PathBuf>, show_codes: bool) -> Result<()> {
    let path = resolve_names_file(file)?;
    let candidates = load_candidates(&path)?;

    for set in match_queries(names, &candidates) {
        if show_codes {
            println!(
                "{} [{}]: {}",
                set.query.bold(),
                set.code.as_str().cyan(),
                set.matches.join(", ")
            );
        } else {
            println!("{}: {}", set.query.bold(), set.matches.join(", "));
        }
    }

    Ok(())
}

/// Encode command
fn cmd_encode(names: &[String]) -> Result<()> {
    for name in names {
        println!("{}\t{}", name, encode(name));
    }
    Ok(())
}

/// Info command
fn cmd_info(file: Option<PathBuf>) -> Result<()> {
    let path = resolve_names_file(file)?;
    let candidates = load_candidates(&path)?;

    let mut groups: FxHashMap<Code, usize> = FxHashMap::default();
    for candidate in &candidates {
        *groups.entry(encode(candidate)).or_insert(0) += 1;
    }

    println!("File: {}", path.display());
    println!("Candidates: {}", candidates.len());
    println!("Distinct codes: {}", groups.len());
    if let Some((code, count)) = groups.iter().max_by_key(|(_, count)| **count) {
        println!("Largest group: {} ({} names)", code, count);
    }

    Ok(())
}

/// Settings command
fn cmd_settings(set_file: Option<PathBuf>, reset: bool) -> Result<()> {
    let mut config = if reset {
        PersistentConfig::default()
    } else {
        PersistentConfig::load().unwrap_or_default()
    };

    let mut changed = reset;
    if let Some(path) = set_file {
        config.names_file = Some(path);
        changed = true;
    }

    if changed {
        config.save()?;
        println!("{}", "Settings saved".green());
    }

    println!("Config file: {}", config_file_path()?.display());
    match &config.names_file {
        Some(path) => println!("Candidate file: {}", path.display()),
        None => println!("Candidate file: {}", "(not set)".dimmed()),
    }

    Ok(())
}
