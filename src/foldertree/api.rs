//! # API Facade
//!
//! [`FolderApi`] owns the [`TreeStore`] for the length of a run and is the
//! single entry point for executing folder commands, whatever feeds them.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** each [`Command`] to its function in `commands/*.rs`
//! - **Sequences events**: every command first echoes itself, then adds what
//!   the command produced (listing lines) or the diagnostic it failed with
//! - **Recovers** from command failures, so one bad line never ends a run
//!
//! It does no printing. The returned [`CmdResult`] carries the ordered
//! events and the surrounding client decides how to show them.

use crate::commands::{self, CmdMessage, CmdResult, ListStyle};
use crate::error::{FolderError, Result};
use crate::model::FolderPath;
use crate::parser::{parse_line, Command};
use crate::store::{AuditReport, TreeStore};

#[derive(Debug, Default)]
pub struct FolderApi {
    store: TreeStore,
    style: ListStyle,
}

impl FolderApi {
    pub fn new(style: ListStyle) -> Self {
        Self {
            store: TreeStore::new(),
            style,
        }
    }

    pub fn execute(&mut self, command: &Command) -> CmdResult {
        tracing::debug!(%command, "executing");
        let outcome = match command {
            Command::Create(path) => commands::create::run(&mut self.store, path),
            Command::List => commands::list::run(&self.store, &self.style),
            Command::Move {
                source,
                destination,
            } => commands::move_folder::run(&mut self.store, source, destination),
            Command::Delete(path) => commands::delete::run(&mut self.store, path),
        };
        report(command.to_string(), outcome)
    }

    /// Parses and executes one source line.
    ///
    /// Returns `None` for blank and comment lines. Lines that do not parse
    /// produce a single error event.
    pub fn execute_line(&mut self, line: &str) -> Option<CmdResult> {
        match parse_line(line)? {
            Ok(command) => Some(self.execute(&command)),
            Err(err) => Some(rejected(err)),
        }
    }

    /// Like [`FolderApi::execute_line`] for a line read as raw bytes.
    ///
    /// A line that is not valid UTF-8 is rejected as malformed.
    pub fn execute_bytes(&mut self, line: &[u8]) -> Option<CmdResult> {
        match std::str::from_utf8(line) {
            Ok(text) => self.execute_line(text),
            Err(_) => {
                let text = String::from_utf8_lossy(line);
                Some(rejected(FolderError::malformed(
                    text.trim(),
                    "line is not valid UTF-8",
                )))
            }
        }
    }

    pub fn create(&mut self, path: &FolderPath) -> CmdResult {
        self.execute(&Command::Create(path.clone()))
    }

    pub fn list(&self) -> CmdResult {
        report(
            Command::List.to_string(),
            commands::list::run(&self.store, &self.style),
        )
    }

    pub fn move_folder(&mut self, source: &FolderPath, destination: &FolderPath) -> CmdResult {
        self.execute(&Command::Move {
            source: source.clone(),
            destination: destination.clone(),
        })
    }

    pub fn delete(&mut self, path: &FolderPath) -> CmdResult {
        self.execute(&Command::Delete(path.clone()))
    }

    pub fn audit(&self) -> AuditReport {
        self.store.audit()
    }

    pub fn store(&self) -> &TreeStore {
        &self.store
    }
}

fn report(echo: String, outcome: Result<CmdResult>) -> CmdResult {
    match outcome {
        Ok(result) => {
            let mut messages = Vec::with_capacity(result.messages.len() + 1);
            messages.push(CmdMessage::info(echo));
            messages.extend(result.messages);
            CmdResult { messages, ..result }
        }
        Err(err) => {
            tracing::info!(error = %err, "{echo} failed");
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(echo));
            result.add_message(CmdMessage::error(err.to_string()));
            result
        }
    }
}

fn rejected(err: FolderError) -> CmdResult {
    tracing::info!(error = %err, "rejected command");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(err.to_string()));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn run_script(api: &mut FolderApi, script: &str) -> Vec<String> {
        script
            .lines()
            .filter_map(|line| api.execute_line(line))
            .flat_map(|result| result.messages)
            .map(|message| message.content)
            .collect()
    }

    #[test]
    fn echoes_each_command_before_output() {
        let mut api = FolderApi::default();
        let output = run_script(&mut api, "CREATE /a\nCREATE /a/b\nLIST");
        assert_eq!(output, vec!["CREATE /a", "CREATE /a/b", "LIST", "a", " b"]);
    }

    #[test]
    fn empty_list_prints_header_and_marker() {
        let api = FolderApi::default();
        assert_eq!(api.list().lines(), vec!["LIST", "EMPTY DIRECTORY"]);
    }

    #[test]
    fn failures_echo_then_report_and_run_continues() {
        let mut api = FolderApi::default();
        let output = run_script(
            &mut api,
            "CREATE /x/y\nDELETE /nope\nMOVE /a /b\nCREATE /ok\nLIST",
        );
        assert_eq!(
            output,
            vec![
                "CREATE /x/y",
                "Cannot create: parent folder 'x' doesn't exist on level 0",
                "DELETE /nope",
                "Cannot delete /nope - nope does not exist",
                "MOVE /a /b",
                "Cannot move /a - a does not exist",
                "CREATE /ok",
                "LIST",
                "ok",
            ]
        );
    }

    #[test]
    fn malformed_lines_yield_single_error() {
        let mut api = FolderApi::default();
        let result = api.execute_line("FROB /a").unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(api.execute_line("").is_none());
        assert!(api.store().is_empty());
    }

    #[test]
    fn non_utf8_line_is_rejected_as_malformed() {
        let mut api = FolderApi::default();
        let result = api.execute_bytes(b"CREATE /caf\xe9").unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("not valid UTF-8"));
        assert!(api.store().is_empty());

        assert!(api.execute_bytes(b"  \r").is_none());
        assert!(!api.execute_bytes(b"CREATE /a\r").unwrap().has_errors());
    }

    #[test]
    fn error_results_are_flagged() {
        let mut api = FolderApi::default();
        let missing = FolderPath::parse("/a/b").unwrap();
        assert!(api.create(&missing).has_errors());
        let root = FolderPath::parse("/a").unwrap();
        assert!(!api.create(&root).has_errors());
    }

    #[test]
    fn move_then_list_reflects_new_parent() {
        let mut api = FolderApi::default();
        let output = run_script(
            &mut api,
            "CREATE /a\nCREATE /a/b\nCREATE /a/b/c\nCREATE /z\nMOVE /a/b /z\nLIST",
        );
        assert_eq!(&output[output.len() - 5..], &["LIST", "a", "z", " b", "  c"]);
        assert!(api.audit().is_clean());
    }

    #[test]
    fn delete_removes_subtree_from_listing() {
        let mut api = FolderApi::default();
        run_script(&mut api, "CREATE /a\nCREATE /a/b\nCREATE /a/b/c\nDELETE /a");
        assert!(api.store().is_empty());
        assert_eq!(api.list().lines(), vec!["LIST", "EMPTY DIRECTORY"]);
    }
}
