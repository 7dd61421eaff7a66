use std::fmt;

use serde::Serialize;

/// One whitespace-hygiene problem found in a file.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The file is not valid UTF-8; no other check ran.
    NotUtf8,
    /// A blank-line run longer than allowed, from its first blank line to the
    /// non-blank line that ended it.
    MultipleEmptyLines { first_line: usize, last_line: usize },
    TrailingWhitespace { line: usize },
    /// The last line is blank.
    ExtraTrailingNewline,
    MissingTrailingNewline,
}

impl Violation {
    /// The diagnostic text printed after the file path.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::NotUtf8 => "is not UTF-8 encoded".to_string(),
            Self::MultipleEmptyLines {
                first_line,
                last_line,
            } => format!("contains multiple empty lines ({first_line},{last_line})"),
            Self::TrailingWhitespace { .. } => "contains trailing whitespace".to_string(),
            Self::ExtraTrailingNewline => "ends with more than one newline".to_string(),
            Self::MissingTrailingNewline => "does not end with a newline".to_string(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Outcome of scanning one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path exactly as it was discovered, e.g. `./src/a.cpp`.
    pub path: String,
    pub violations: Vec<Violation>,
}

impl FileReport {
    #[must_use]
    pub const fn new(path: String, violations: Vec<Violation>) -> Self {
        Self { path, violations }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// One `error: <path> <message>` line per violation, in scan order.
    pub fn diagnostics(&self) -> impl Iterator<Item = String> + '_ {
        self.violations
            .iter()
            .map(|v| format!("error: {} {v}", self.path))
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
