use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ws-guard")]
#[command(
    author,
    version,
    about = "Whitespace guard - flag trailing whitespace, blank-line runs and end-of-file newline problems"
)]
#[command(long_about = "Checks git-tracked text files matching the given shell-glob patterns.\n\n\
    Patterns containing '/' match the path relative to the current directory;\n\
    other patterns match the file name only.\n\n\
    Exit codes:\n  \
    0 - All checked files passed\n  \
    1 - Violations found\n  \
    2 - Usage or runtime error")]
pub struct Cli {
    /// Shell-glob patterns selecting files to check (e.g. '*.cpp', 'src/*.h')
    pub patterns: Vec<String>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Also check tracked files that look binary or contain no text
    #[arg(long)]
    pub include_binary: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
