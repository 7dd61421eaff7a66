mod result;

pub use result::{FileReport, Violation};

use std::fs;
use std::path::Path;

use tracing::{debug, error};

use crate::error::{Result, WsGuardError};
use crate::rules::{CheckCategory, ExclusionRules, max_blank_run};

/// Trait for checking a single file for whitespace problems.
pub trait Checker {
    /// Scan the file at `path` and collect every violation.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read. Undecodable content is a
    /// violation, not an error.
    fn check(&self, path: &Path) -> Result<FileReport>;
}

/// Line scanner for trailing whitespace, blank-line runs and end-of-file
/// newline discipline.
pub struct WhitespaceChecker<'a> {
    rules: &'a ExclusionRules,
}

impl<'a> WhitespaceChecker<'a> {
    #[must_use]
    pub const fn new(rules: &'a ExclusionRules) -> Self {
        Self { rules }
    }

    /// Scan already-decoded file content. `path` is only used for exemption
    /// lookups and for the report.
    #[must_use]
    pub fn check_content(&self, path: &str, content: &str) -> FileReport {
        let skip_trailing = self.is_exempt(CheckCategory::TrailingWhitespace, path);
        let skip_blank = self.is_exempt(CheckCategory::BlankLines, path);
        let max_blank = max_blank_run(path);

        let lines = split_lines(content);
        let mut violations = Vec::new();
        let mut blank_run: Vec<usize> = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            if !skip_blank {
                if line.trim().is_empty() {
                    blank_run.push(index);
                } else {
                    if blank_run.len() > max_blank
                        && let Some(&first) = blank_run.first()
                    {
                        violations.push(Violation::MultipleEmptyLines {
                            first_line: first + 1,
                            last_line: index + 1,
                        });
                    }
                    blank_run.clear();
                }
            }

            if !skip_trailing && strip_terminator(line).ends_with([' ', '\t']) {
                violations.push(Violation::TrailingWhitespace { line: index + 1 });
            }
        }

        if !skip_blank && let Some(last) = lines.last() {
            if last.trim().is_empty() {
                violations.push(Violation::ExtraTrailingNewline);
            } else if !last.ends_with(['\n', '\r'])
                && !self.is_exempt(CheckCategory::MissingNewline, path)
            {
                violations.push(Violation::MissingTrailingNewline);
            }
        }

        FileReport::new(path.to_string(), violations)
    }

    fn is_exempt(&self, category: CheckCategory, path: &str) -> bool {
        let hits = self.rules.matching_rules(category, path);
        if hits.is_empty() {
            return false;
        }
        debug!(path, ?category, rules = ?hits, "check skipped by exclusion rule");
        true
    }

    /// Read `location` from disk but report and match rules against `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn check_file(&self, location: &Path, path: &str) -> Result<FileReport> {
        let bytes = fs::read(location).map_err(|e| WsGuardError::FileRead {
            path: location.to_path_buf(),
            source: e,
        })?;

        match String::from_utf8(bytes) {
            Ok(content) => Ok(self.check_content(path, &content)),
            Err(e) => {
                debug!(path, error = %e.utf8_error(), "file is not valid UTF-8");
                Ok(FileReport::new(path.to_string(), vec![Violation::NotUtf8]))
            }
        }
    }
}

impl Checker for WhitespaceChecker<'_> {
    fn check(&self, path: &Path) -> Result<FileReport> {
        self.check_file(path, &path.to_string_lossy())
    }
}

/// Scan one file and print its diagnostics to stdout.
///
/// Returns `true` when the file passed. A file that cannot be read is
/// logged and counts as failed.
pub fn check_whitespace(path: &Path, rules: &ExclusionRules) -> bool {
    match WhitespaceChecker::new(rules).check(path) {
        Ok(report) => {
            for line in report.diagnostics() {
                println!("{line}");
            }
            report.passed()
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "cannot check file");
            false
        }
    }
}

/// Split after every `\n`, `\r\n` or lone `\r`, keeping the terminators.
fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let end = match bytes[i] {
            b'\n' => i,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => i + 1,
            b'\r' => i,
            _ => {
                i += 1;
                continue;
            }
        };
        lines.push(&content[start..=end]);
        start = end + 1;
        i = start;
    }

    if start < bytes.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Drop the `\n`, `\r\n` or `\r` that ends a line.
fn strip_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix(['\n', '\r']))
        .unwrap_or(line)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
