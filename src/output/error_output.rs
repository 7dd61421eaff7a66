//! Fatal error reporting on stderr.
//!
//! Format: `✖ {error_type}: {message}` followed by an optional
//! `  help: {suggestion}` line.

use std::io::{IsTerminal, Write};

use crate::error::WsGuardError;

use super::ColorMode;
use super::text::ansi;

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var("NO_COLOR").is_err() && std::io::stderr().is_terminal()
            }
        };
        Self { use_colors }
    }

    pub fn print_error(&self, error: &WsGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error);
    }

    /// Write `error` to `w`. Write failures are ignored; there is nowhere left
    /// to report them.
    pub fn write_error<W: Write>(&self, w: &mut W, error: &WsGuardError) {
        let error_type = error.error_type();
        let message = error.message();

        if self.use_colors {
            let _ = writeln!(
                w,
                "{}✖ {error_type}:{} {message}",
                ansi::BOLD_RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {suggestion}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {suggestion}");
            }
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
