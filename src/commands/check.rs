use std::io::Write;
use std::path::Path;

use tracing::{error, info};

use crate::checker::{FileReport, WhitespaceChecker};
use crate::cli::Cli;
use crate::error::Result;
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::rules::ExclusionRules;
use crate::scanner::{FileScanner, GitScanner, GlobFilter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND};

/// Options for one check run.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    pub exclude_binary: bool,
    pub format: OutputFormat,
    pub color: ColorMode,
}

impl CheckOptions {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            exclude_binary: !cli.include_binary,
            format: cli.format,
            color: cli.color.into(),
        }
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            exclude_binary: true,
            format: OutputFormat::Text,
            color: ColorMode::Never,
        }
    }
}

#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Check the current directory's tracked files against every pattern.
///
/// # Errors
/// Returns an error for an invalid pattern or when output cannot be written.
pub fn run_check_impl(cli: &Cli) -> Result<i32> {
    let rules = ExclusionRules::builtin()?;
    let scanner = GitScanner::new(".");
    let options = CheckOptions::from_cli(cli);

    let mut stdout = std::io::stdout().lock();
    run_patterns(&scanner, Path::new("."), &rules, &cli.patterns, options, &mut stdout)
}

/// Discover and scan the files of each pattern in turn.
///
/// A file matching several patterns is scanned once per pattern. Paths from
/// `scanner` are resolved against `root` for reading. Every pattern is
/// compiled before the first file is scanned. Returns the process exit code.
///
/// # Errors
/// Returns an error for an invalid pattern or when output cannot be written.
pub fn run_patterns<S, W>(
    scanner: &S,
    root: &Path,
    rules: &ExclusionRules,
    patterns: &[String],
    options: CheckOptions,
    out: &mut W,
) -> Result<i32>
where
    S: FileScanner + ?Sized,
    W: Write,
{
    let checker = WhitespaceChecker::new(rules);
    let formatter: Box<dyn OutputFormatter> = match options.format {
        OutputFormat::Text => Box::new(TextFormatter::new(options.color)),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    let mut failed = false;
    let mut collected: Vec<FileReport> = Vec::new();

    let filters = patterns
        .iter()
        .map(|pattern| GlobFilter::single(pattern))
        .collect::<Result<Vec<_>>>()?;

    for (pattern, filter) in patterns.iter().zip(&filters) {
        let files = scanner.find(filter, options.exclude_binary);
        info!(pattern = pattern.as_str(), count = files.len(), "checking files");

        for file in files {
            let display_path = file.to_string_lossy();
            match checker.check_file(&root.join(&file), &display_path) {
                Ok(report) => {
                    failed |= !report.passed();
                    if options.format.is_streaming() {
                        write_output(out, &formatter.format(std::slice::from_ref(&report))?)?;
                    } else {
                        collected.push(report);
                    }
                }
                Err(e) => {
                    error!(path = %display_path, error = %e, "cannot check file");
                    failed = true;
                }
            }
        }
    }

    if !options.format.is_streaming() {
        write_output(out, &formatter.format(&collected)?)?;
    }

    Ok(if failed {
        EXIT_VIOLATIONS_FOUND
    } else {
        EXIT_SUCCESS
    })
}

fn write_output<W: Write>(out: &mut W, content: &str) -> Result<()> {
    out.write_all(content.as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
