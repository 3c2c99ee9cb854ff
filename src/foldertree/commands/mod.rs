use crate::model::Node;

pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod move_folder;

pub const DEFAULT_INDENT: &str = " ";
pub const DEFAULT_EMPTY_MARKER: &str = "EMPTY DIRECTORY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
    /// One rendered line of a `LIST` output.
    Listing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    pub fn listing(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Listing,
            content: content.into(),
        }
    }
}

/// A folder as it appears in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFolder {
    pub depth: usize,
    pub node: Node,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Folders created, moved or deleted, in the state the command left them.
    pub affected: Vec<Node>,
    pub listed: Vec<ListedFolder>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, nodes: Vec<Node>) -> Self {
        self.affected = nodes;
        self
    }

    pub fn with_listed(mut self, folders: Vec<ListedFolder>) -> Self {
        self.listed = folders;
        self
    }

    /// True when any message reports a failure.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|message| message.level == MessageLevel::Error)
    }

    /// Message contents in emission order.
    pub fn lines(&self) -> Vec<&str> {
        self.messages
            .iter()
            .map(|message| message.content.as_str())
            .collect()
    }
}

/// How `LIST` renders the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStyle {
    /// Repeated once per depth level in front of each name.
    pub indent: String,
    /// Printed instead of the tree when there are no folders.
    pub empty_marker: String,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            empty_marker: DEFAULT_EMPTY_MARKER.to_string(),
        }
    }
}

impl ListStyle {
    pub fn render_line(&self, depth: usize, name: &str) -> String {
        format!("{}{}", self.indent.repeat(depth), name)
    }
}
