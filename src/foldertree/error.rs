use crate::model::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolderError {
    #[error("Cannot create: parent folder '{parent}' doesn't exist on level {depth}")]
    ParentNotFound { parent: String, depth: usize },

    #[error("Cannot move {path} - {name} does not exist")]
    SourceNotFound { path: String, name: String },

    #[error("Cannot move to {path} - {name} does not exist")]
    DestinationNotFound { path: String, name: String },

    #[error("Cannot move {path} into its own subtree ({destination})")]
    CyclicMove { path: String, destination: String },

    #[error("Cannot delete {path} - {name} does not exist")]
    TargetNotFound { path: String, name: String },

    #[error("Malformed command '{line}': {reason}")]
    MalformedCommand { line: String, reason: String },

    /// A node the store itself listed could not be found again. Only an
    /// inconsistent store produces this; commands never report it for user
    /// input.
    #[error("Node {0} is not in the store")]
    NodeNotFound(NodeId),

    #[error("File not found: {}", .0.display())]
    CommandFileNotFound(std::path::PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl FolderError {
    pub fn malformed(line: impl Into<String>, reason: impl Into<String>) -> Self {
        FolderError::MalformedCommand {
            line: line.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolderError>;
