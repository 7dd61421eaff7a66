mod error_output;
mod json;
mod text;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::checker::FileReport;
use crate::error::Result;

/// Trait for formatting scan reports into various output formats.
pub trait OutputFormatter {
    /// Format the reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[FileReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `error:` line per violation, printed as each file is scanned.
    #[default]
    Text,
    /// A single document written after every file was scanned.
    Json,
}

impl OutputFormat {
    /// Whether output can be written file by file.
    #[must_use]
    pub const fn is_streaming(self) -> bool {
        matches!(self, Self::Text)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
