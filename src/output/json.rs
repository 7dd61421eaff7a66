use serde::Serialize;

use crate::checker::{FileReport, Violation};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    files_checked: usize,
    files_failed: usize,
    violations: usize,
}

#[derive(Serialize)]
struct FileResult<'a> {
    path: &'a str,
    passed: bool,
    violations: Vec<ViolationEntry<'a>>,
}

#[derive(Serialize)]
struct ViolationEntry<'a> {
    #[serde(flatten)]
    violation: &'a Violation,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[FileReport]) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_checked: reports.len(),
                files_failed: reports.iter().filter(|r| !r.passed()).count(),
                violations: reports.iter().map(|r| r.violations.len()).sum(),
            },
            results: reports.iter().map(convert_report).collect(),
        };

        Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
    }
}

fn convert_report(report: &FileReport) -> FileResult<'_> {
    FileResult {
        path: &report.path,
        passed: report.passed(),
        violations: report
            .violations
            .iter()
            .map(|violation| ViolationEntry {
                violation,
                message: violation.message(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
