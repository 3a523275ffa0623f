//! Lint module for slide deck checking
//!
//! This module catches authoring mistakes before a deck reaches the headset:
//! - Slide identity (missing or duplicate ids)
//! - Content (blank or overlong text)
//! - Button declarations the controller will ignore or override

use crate::types::SlideCollection;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod checks;
pub mod config;

/// How serious a deck problem is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LintLevel {
    /// The deck will not play as authored
    Error,
    /// The deck plays, but not the way the author probably meant
    Warning,
    /// Declarations the controller ignores or overrides
    Info,
}

impl fmt::Display for LintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintLevel::Error => f.write_str("error"),
            LintLevel::Warning => f.write_str("warning"),
            LintLevel::Info => f.write_str("info"),
        }
    }
}

/// One problem found on one slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintIssue {
    pub level: LintLevel,
    pub message: String,
    /// Position of the offending slide in the deck, starting at 0
    pub slide: usize,
    /// Check that raised the issue, e.g. `identity` or `buttons`
    pub category: String,
}

impl LintIssue {
    pub fn new(level: LintLevel, category: &str, slide: usize, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            slide,
            category: category.to_string(),
        }
    }
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] slide {}: {}",
            self.level,
            self.category,
            self.slide + 1,
            self.message
        )
    }
}

/// Issues collected over a whole deck, with per-level tallies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LintResult {
    pub issues: Vec<LintIssue>,
    pub error_count: usize,
    pub warning_count: usize,
    pub info_count: usize,
}

impl LintResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an issue and bump the tally for its level
    pub fn add_issue(&mut self, issue: LintIssue) {
        let tally = match issue.level {
            LintLevel::Error => &mut self.error_count,
            LintLevel::Warning => &mut self.warning_count,
            LintLevel::Info => &mut self.info_count,
        };
        *tally += 1;
        self.issues.push(issue);
    }

    /// Whether any slide would block playback
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Lint a deck with default configuration
pub fn lint(slides: &SlideCollection) -> LintResult {
    let config = config::LintConfig::default();
    lint_with_config(slides, &config)
}

/// Lint a deck with custom configuration
pub fn lint_with_config(slides: &SlideCollection, config: &config::LintConfig) -> LintResult {
    let mut result = LintResult::new();

    if config.identity.enabled {
        checks::identity::check(slides, &mut result, config);
    }

    if config.content.enabled {
        checks::content::check(slides, &mut result, config);
    }

    if config.buttons.enabled {
        checks::buttons::check(slides, &mut result, config);
    }

    result
}
