//! Path-based exemption policy for each whitespace check.
//!
//! Every rule is a regular expression searched (not fully matched) against the
//! file path, so a rule may hit anywhere in the string. A path is exempt from a
//! check category as soon as one rule of that category matches.

use regex::{Regex, RegexSet};

use crate::error::{Result, WsGuardError};

/// Generated sources and vendored artifacts that keep their own whitespace.
pub const TRAILING_WHITESPACE_EXCLUSIONS: &[&str] = &[
    r"(Grammar|Scanner)\.(h|cpp|m)",
    "(coeur.utf8)$",
    "(GRADLE_LICENSE)$",
    "(Resource.designer.cs)$",
    "(gradlew|gradlew.bat)$",
];

/// Exempt from both the blank-run check and the end-of-file checks.
pub const BLANK_LINE_EXCLUSIONS: &[&str] = &[
    r"(Grammar|Scanner)\.(h|cpp|m)",
    "(coeur.utf8)$",
    "(GRADLE_LICENSE)$",
    "src/ice/msi/docs/main/THIRD_PARTY_LICENSE.txt",
    "(Resource.designer.cs)$",
    "(gradlew|gradlew.bat)$",
];

/// Project files and asset catalogs that tools write without a final newline.
pub const MISSING_NEWLINE_EXEMPTIONS: &[&str] = &[
    "(.sln|.csproj|.vcxproj|.vcxproj.filters|vcxproj.user|.uwp.appxmanifest|.resx|packages.config|packages.lock.json)$",
    "/Images.xcassets/",
];

/// Suffixes whose style guides allow two consecutive blank lines.
const SCRIPTING_SUFFIXES: &[&str] = &[".py"];

/// The check families a path can be exempted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckCategory {
    TrailingWhitespace,
    /// Blank-line runs plus both end-of-file checks.
    BlankLines,
    /// Only the "does not end with a newline" check.
    MissingNewline,
}

/// Immutable, compiled exemption policy.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    trailing_whitespace: RegexSet,
    blank_lines: RegexSet,
    missing_newline: RegexSet,
}

impl ExclusionRules {
    /// Compile the built-in rule lists.
    ///
    /// # Errors
    /// Returns an error if a built-in rule fails to compile.
    pub fn builtin() -> Result<Self> {
        Self::new(
            TRAILING_WHITESPACE_EXCLUSIONS,
            BLANK_LINE_EXCLUSIONS,
            MISSING_NEWLINE_EXEMPTIONS,
        )
    }

    /// Compile a custom rule set, one ordered list per category.
    ///
    /// # Errors
    /// Returns an error naming the first rule that is not a valid regex.
    pub fn new(
        trailing_whitespace: &[&str],
        blank_lines: &[&str],
        missing_newline: &[&str],
    ) -> Result<Self> {
        Ok(Self {
            trailing_whitespace: compile(trailing_whitespace)?,
            blank_lines: compile(blank_lines)?,
            missing_newline: compile(missing_newline)?,
        })
    }

    const fn rules_for(&self, category: CheckCategory) -> &RegexSet {
        match category {
            CheckCategory::TrailingWhitespace => &self.trailing_whitespace,
            CheckCategory::BlankLines => &self.blank_lines,
            CheckCategory::MissingNewline => &self.missing_newline,
        }
    }

    /// Whether any rule of `category` occurs somewhere in `path`.
    #[must_use]
    pub fn is_exempt(&self, category: CheckCategory, path: &str) -> bool {
        self.rules_for(category).is_match(path)
    }

    /// The rules of `category` that hit `path`, in declaration order.
    #[must_use]
    pub fn matching_rules(&self, category: CheckCategory, path: &str) -> Vec<&str> {
        let set = self.rules_for(category);
        set.matches(path)
            .into_iter()
            .map(|i| set.patterns()[i].as_str())
            .collect()
    }
}

fn compile(patterns: &[&str]) -> Result<RegexSet> {
    for pattern in patterns {
        Regex::new(pattern).map_err(|e| WsGuardError::InvalidRule {
            pattern: (*pattern).to_string(),
            source: e,
        })?;
    }
    RegexSet::new(patterns).map_err(|e| WsGuardError::InvalidRule {
        pattern: "combined rules".to_string(),
        source: e,
    })
}

/// Longest run of blank lines allowed before a non-blank line.
#[must_use]
pub fn max_blank_run(path: &str) -> usize {
    if SCRIPTING_SUFFIXES.iter().any(|suffix| path.ends_with(suffix)) {
        2
    } else {
        1
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
