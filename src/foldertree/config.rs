use crate::commands::{ListStyle, DEFAULT_EMPTY_MARKER, DEFAULT_INDENT};
use crate::error::{FolderError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

/// Configuration for foldertree, stored as `config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FolderConfig {
    /// Marker repeated once per depth level in `LIST` output
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Line printed by `LIST` when there are no folders
    #[serde(default = "default_empty_marker")]
    pub empty_marker: String,
}

fn default_indent() -> String {
    DEFAULT_INDENT.to_string()
}

fn default_empty_marker() -> String {
    DEFAULT_EMPTY_MARKER.to_string()
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            empty_marker: default_empty_marker(),
        }
    }
}

impl FolderConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file, or return defaults if it does not exist
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: FolderConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn set_indent(&mut self, indent: &str) -> Result<()> {
        if indent.is_empty() {
            return Err(FolderError::Config("indent cannot be empty".to_string()));
        }
        self.indent = indent.to_string();
        Ok(())
    }

    pub fn list_style(&self) -> ListStyle {
        ListStyle {
            indent: self.indent.clone(),
            empty_marker: self.empty_marker.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.indent.is_empty() {
            return Err(FolderError::Config("indent cannot be empty".to_string()));
        }
        Ok(())
    }
}
