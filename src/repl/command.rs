//! REPL input parsing
//!
//! A REPL line is either a session command or a match request. Requests use
//! the combined syntax `Name1 Name2 < surnames.txt`: whitespace-separated
//! query names, optionally followed by `<` and the candidate file. The split
//! happens at the last `" <"` occurrence, so a stray `<` glued inside a name
//! stays part of the queries.

use std::path::PathBuf;

/// A parsed line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// Match the given queries, optionally against an explicit file
    Request {
        /// Query names, in input order
        queries: Vec<String>,
        /// Candidate file named after `<`, if any
        file: Option<PathBuf>,
    },
    /// Set the session candidate file: `file <path>`
    File(PathBuf),
    /// Show help: `help`
    Help,
    /// Exit the session: `exit` | `quit`
    Exit,
    /// Blank line
    Empty,
}

/// Parse one line of REPL input.
pub fn parse_request(line: &str) -> ReplInput {
    let line = line.trim();
    if line.is_empty() {
        return ReplInput::Empty;
    }
    match line {
        "exit" | "quit" => return ReplInput::Exit,
        "help" => return ReplInput::Help,
        _ => {}
    }
    if let Some(path) = line.strip_prefix("file ") {
        return ReplInput::File(PathBuf::from(path.trim()));
    }

    let (names_part, file) = match line.rfind(" <") {
        Some(idx) => {
            let file = line[idx + 2..].trim();
            (&line[..idx], Some(PathBuf::from(file)))
        }
        None => (line, None),
    };

    ReplInput::Request {
        queries: names_part.split_whitespace().map(str::to_string).collect(),
        file,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_request() {
        assert_eq!(
            parse_request("Smith Smyth < surnames.txt"),
            ReplInput::Request {
                queries: vec!["Smith".to_string(), "Smyth".to_string()],
                file: Some(PathBuf::from("surnames.txt")),
            }
        );
    }

    #[test]
    fn test_request_without_file() {
        assert_eq!(
            parse_request("Smith Jones"),
            ReplInput::Request {
                queries: vec!["Smith".to_string(), "Jones".to_string()],
                file: None,
            }
        );
    }

    #[test]
    fn test_split_uses_last_angle_bracket() {
        assert_eq!(
            parse_request("a < b < surnames.txt"),
            ReplInput::Request {
                queries: vec!["a".to_string(), "<".to_string(), "b".to_string()],
                file: Some(PathBuf::from("surnames.txt")),
            }
        );
    }

    #[test]
    fn test_angle_bracket_inside_name_is_not_a_split() {
        assert_eq!(
            parse_request("a<b"),
            ReplInput::Request {
                queries: vec!["a<b".to_string()],
                file: None,
            }
        );
    }

    #[test]
    fn test_session_commands() {
        assert_eq!(parse_request(""), ReplInput::Empty);
        assert_eq!(parse_request("   "), ReplInput::Empty);
        assert_eq!(parse_request("exit"), ReplInput::Exit);
        assert_eq!(parse_request("quit"), ReplInput::Exit);
        assert_eq!(parse_request("help"), ReplInput::Help);
        assert_eq!(
            parse_request("file names.txt"),
            ReplInput::File(PathBuf::from("names.txt"))
        );
    }
}
