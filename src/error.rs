use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsGuardError {
    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid exclusion rule: {pattern}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Not a git repository: {0}")]
    GitRepoNotFound(String),
}

impl WsGuardError {
    /// Short category name shown as the headline of a fatal error.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidPattern { .. } => "Pattern",
            Self::InvalidRule { .. } => "Rule",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialization",
            Self::Git(_) | Self::GitRepoNotFound(_) => "Git",
        }
    }

    /// The error text without its category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::InvalidPattern { pattern, source } => format!("'{pattern}': {source}"),
            Self::InvalidRule { pattern, source } => format!("'{pattern}': {source}"),
            Self::FileRead { path, source } => format!("{}: {source}", path.display()),
            Self::Io(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
            Self::Git(msg) | Self::GitRepoNotFound(msg) => msg.clone(),
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidPattern { .. } => {
                Some("Use shell glob syntax, e.g. '*.cpp' or 'src/*.h'")
            }
            Self::Git(_) => Some("Check that git is installed and the repository is not corrupt"),
            Self::GitRepoNotFound(_) => {
                Some("Run inside a git working tree, or create one with 'git init'")
            }
            Self::InvalidRule { .. }
            | Self::FileRead { .. }
            | Self::Io(_)
            | Self::JsonSerialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WsGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
