//! Command-line grammar for the folder language.
//!
//! ```text
//! CREATE <path>
//! LIST
//! MOVE <path> <new_path>
//! DELETE <path>
//! ```
//!
//! Tokens are separated by whitespace and verbs are case-sensitive.

use crate::error::{FolderError, Result};
use crate::model::FolderPath;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(FolderPath),
    List,
    Move {
        source: FolderPath,
        destination: FolderPath,
    },
    Delete(FolderPath),
}

impl Command {
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Create(_) => "CREATE",
            Command::List => "LIST",
            Command::Move { .. } => "MOVE",
            Command::Delete(_) => "DELETE",
        }
    }
}

/// Echo line for the command, with paths exactly as written.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Create(path) | Command::Delete(path) => write!(f, "{} {}", self.verb(), path),
            Command::List => f.write_str(self.verb()),
            Command::Move {
                source,
                destination,
            } => write!(f, "{} {} {}", self.verb(), source, destination),
        }
    }
}

impl FromStr for Command {
    type Err = FolderError;

    fn from_str(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((verb, args)) = tokens.split_first() else {
            return Err(FolderError::malformed(line, "empty command"));
        };

        let path = |raw: &str| {
            FolderPath::parse(raw)
                .map_err(|_| FolderError::malformed(line, format!("invalid path '{raw}'")))
        };
        let arity = |expected: usize| {
            FolderError::malformed(
                line,
                format!(
                    "{verb} takes {expected} argument{}, got {}",
                    if expected == 1 { "" } else { "s" },
                    args.len()
                ),
            )
        };

        match (*verb, args) {
            ("CREATE", [raw]) => Ok(Command::Create(path(*raw)?)),
            ("LIST", []) => Ok(Command::List),
            ("MOVE", [from, to]) => Ok(Command::Move {
                source: path(*from)?,
                destination: path(*to)?,
            }),
            ("DELETE", [raw]) => Ok(Command::Delete(path(*raw)?)),
            ("CREATE" | "DELETE", _) => Err(arity(1)),
            ("LIST", _) => Err(arity(0)),
            ("MOVE", _) => Err(arity(2)),
            (other, _) => Err(FolderError::malformed(
                line,
                format!("unknown command '{other}'"),
            )),
        }
    }
}

/// Parses one source line, skipping blank lines and `#` comments.
pub fn parse_line(line: &str) -> Option<Result<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed.parse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_verb() {
        assert!(matches!("CREATE /a/b".parse::<Command>(), Ok(Command::Create(_))));
        assert_eq!("LIST".parse::<Command>().unwrap(), Command::List);
        assert!(matches!("MOVE /a /b".parse::<Command>(), Ok(Command::Move { .. })));
        assert!(matches!("DELETE a".parse::<Command>(), Ok(Command::Delete(_))));
    }

    #[test]
    fn echo_keeps_paths_as_written() {
        let command: Command = "MOVE   grains/squash   vegetables/".parse().unwrap();
        assert_eq!(command.to_string(), "MOVE grains/squash vegetables/");
    }

    #[test]
    fn rejects_wrong_arity() {
        for line in ["CREATE", "CREATE /a /b", "LIST /a", "MOVE /a", "DELETE"] {
            let err = line.parse::<Command>().unwrap_err();
            assert!(
                matches!(err, FolderError::MalformedCommand { .. }),
                "{line} should be malformed"
            );
        }
    }

    #[test]
    fn rejects_unknown_and_lowercase_verbs() {
        let err = "create /a".parse::<Command>().unwrap_err();
        assert!(err.to_string().contains("unknown command 'create'"));
        assert!("RENAME /a /b".parse::<Command>().is_err());
    }

    #[test]
    fn rejects_slash_only_path() {
        let err = "DELETE /".parse::<Command>().unwrap_err();
        assert!(err.to_string().contains("invalid path '/'"));
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert!(parse_line("   ").is_none());
        assert!(parse_line("# setup").is_none());
        assert!(matches!(parse_line("  LIST \n"), Some(Ok(Command::List))));
    }
}
