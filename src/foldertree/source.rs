//! Where command lines come from.
//!
//! A run reads one command per line from a file, from stdin, or from lines
//! given inline. Reading stops only on I/O failure; every line that reaches
//! the [`FolderApi`] is executed or reported, never fatal. Lines are read as
//! raw bytes so a line that is not UTF-8 is reported like any other bad line.

use crate::api::FolderApi;
use crate::commands::CmdResult;
use crate::error::{FolderError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSource {
    File(PathBuf),
    Stdin,
    Inline(Vec<String>),
}

impl CommandSource {
    /// `-` or no path means stdin.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.as_os_str() != "-" => CommandSource::File(path),
            _ => CommandSource::Stdin,
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            CommandSource::File(path) => {
                if !path.is_file() {
                    return Err(FolderError::CommandFileNotFound(path.clone()));
                }
                Ok(Box::new(BufReader::new(File::open(path)?)))
            }
            CommandSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            CommandSource::Inline(lines) => Ok(Box::new(io::Cursor::new(lines.join("\n")))),
        }
    }
}

/// Summary of a replayed source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    pub executed: usize,
    pub failed: usize,
}

/// Feeds every line of `reader` to `api`, handing each result to `on_result`
/// in order.
pub fn replay<R: BufRead>(
    api: &mut FolderApi,
    reader: R,
    mut on_result: impl FnMut(&CmdResult),
) -> Result<ReplayStats> {
    let mut stats = ReplayStats::default();
    for (number, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let Some(result) = api.execute_bytes(&line) else {
            continue;
        };
        stats.executed += 1;
        if result.has_errors() {
            stats.failed += 1;
            tracing::debug!(line = number + 1, "command reported an error");
        }
        on_result(&result);
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_lines_in_order() {
        let mut api = FolderApi::default();
        let input = "CREATE /a\n\n# comment\nCREATE /b/c\nLIST\n";
        let mut seen = Vec::new();

        let stats = replay(&mut api, input.as_bytes(), |result| {
            seen.extend(result.lines().into_iter().map(str::to_string));
        })
        .unwrap();

        assert_eq!(stats, ReplayStats { executed: 3, failed: 1 });
        assert_eq!(seen[0], "CREATE /a");
        assert_eq!(seen.last().map(String::as_str), Some("a"));
    }

    #[test]
    fn bad_encoding_on_one_line_does_not_stop_the_run() {
        let mut api = FolderApi::default();
        let input: &[u8] = b"CREATE /a\nCREATE /caf\xe9\r\nCREATE /b\nLIST\n";
        let mut seen = Vec::new();

        let stats = replay(&mut api, input, |result| {
            seen.extend(result.lines().into_iter().map(str::to_string));
        })
        .unwrap();

        assert_eq!(stats, ReplayStats { executed: 4, failed: 1 });
        assert_eq!(api.store().len(), 2);
        assert_eq!(seen[0], "CREATE /a");
        assert!(seen[1].contains("not valid UTF-8"));
        assert_eq!(&seen[2..], &["CREATE /b", "LIST", "a", "b"]);
    }

    #[test]
    fn dash_means_stdin() {
        assert_eq!(
            CommandSource::from_arg(Some(PathBuf::from("-"))),
            CommandSource::Stdin
        );
        assert_eq!(CommandSource::from_arg(None), CommandSource::Stdin);
    }

    #[test]
    fn missing_file_is_reported() {
        let source = CommandSource::File(PathBuf::from("/definitely/not/here.txt"));
        let err = source.open().err().unwrap();
        assert_eq!(err.to_string(), "File not found: /definitely/not/here.txt");
    }

    #[test]
    fn inline_lines_are_read_back() {
        let source = CommandSource::Inline(vec!["CREATE /a".into(), "LIST".into()]);
        let mut api = FolderApi::default();
        let stats = replay(&mut api, source.open().unwrap(), |_| {}).unwrap();
        assert_eq!(stats.executed, 2);
        assert_eq!(api.store().len(), 1);
    }
}
