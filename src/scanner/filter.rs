use std::path::{Component, Path, PathBuf};

use globset::{ErrorKind, Glob, GlobMatcher};
use tracing::debug;

use crate::error::{Result, WsGuardError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// How a single command-line pattern is applied to a candidate path.
struct PatternMatcher {
    matcher: GlobMatcher,
    /// Patterns with a `/` see the whole normalized path, others only the
    /// file name.
    full_path: bool,
}

/// Shell-glob filter over discovered paths.
///
/// `*.cpp` selects by file name anywhere in the tree; `src/*.h` is matched
/// against the path with `./` segments removed. `*` also crosses `/`.
pub struct GlobFilter {
    patterns: Vec<PatternMatcher>,
}

impl GlobFilter {
    /// Create a filter that accepts a path matching any of `patterns`.
    ///
    /// A `[` or `{` that is never closed, or a stray `}`, matches itself.
    ///
    /// # Errors
    /// Returns an error if any pattern is not a valid glob.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Ok(PatternMatcher {
                    matcher: compile(pattern)?.compile_matcher(),
                    full_path: pattern.contains('/'),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Create a filter for a single pattern.
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid glob.
    pub fn single(pattern: &str) -> Result<Self> {
        Self::new(&[pattern])
    }
}

fn compile(pattern: &str) -> Result<Glob> {
    let invalid = |source: globset::Error| WsGuardError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    };

    match Glob::new(pattern) {
        Ok(glob) => Ok(glob),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::UnclosedClass
                    | ErrorKind::UnclosedAlternates
                    | ErrorKind::UnopenedAlternates
            ) =>
        {
            let literal = escape_unbalanced(pattern);
            debug!(pattern, literal = literal.as_str(), "unbalanced bracket taken literally");
            Glob::new(&literal).map_err(invalid)
        }
        Err(e) => Err(invalid(e)),
    }
}

/// Escape every `[` without a closing `]`, every `{` without a closing `}`
/// and every `}` without an opening `{`. Balanced syntax is kept as is.
fn escape_unbalanced(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens: Vec<String> = Vec::new();
    let mut open_braces: Vec<usize> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' if i + 1 < chars.len() => {
                tokens.push(chars[i..=i + 1].iter().collect());
                i += 2;
                continue;
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    tokens.push(chars[i..=end].iter().collect());
                    i = end + 1;
                    continue;
                }
                None => tokens.push(globset::escape("[")),
            },
            '{' => {
                open_braces.push(tokens.len());
                tokens.push("{".to_string());
            }
            '}' => {
                if open_braces.pop().is_some() {
                    tokens.push("}".to_string());
                } else {
                    tokens.push(globset::escape("}"));
                }
            }
            c => tokens.push(c.to_string()),
        }
        i += 1;
    }

    for index in open_braces {
        tokens[index] = globset::escape("{");
    }
    tokens.concat()
}

/// Index of the `]` closing the class opened at `start`. A `]` right after
/// `[` or `[!` belongs to the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + 1;
    if matches!(chars.get(i), Some('!' | '^')) {
        i += 1;
    }
    if chars.get(i) == Some(&']') {
        i += 1;
    }
    chars[i.min(chars.len())..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| i + offset)
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        let normalized = normalize(path);
        let Some(file_name) = path.file_name() else {
            return false;
        };

        self.patterns.iter().any(|p| {
            if p.full_path {
                p.matcher.is_match(&normalized)
            } else {
                p.matcher.is_match(file_name)
            }
        })
    }
}

/// `./src/./a.cpp` -> `src/a.cpp`, always with `/` separators.
fn normalize(path: &Path) -> String {
    let cleaned: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    cleaned.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
