// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct PwError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl PwError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl fmt::Display for PwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for PwError {}

/// Common error builders for typical failure scenarios.
impl PwError {
    /// Error for starting a monitor with nothing to watch.
    pub fn no_targets(config: &Path) -> Self {
        PwError::new("No monitoring targets configured")
            .with_context(format!("Loaded configuration from {}", config.display()))
            .with_suggestion("Add one: pw target add <url> <selector> --kind css")
            .with_suggestion("Or point at another file: pw --config <path> run")
    }

    /// Error for a list position that does not exist.
    pub fn no_such_entry(kind: &str, index: usize, len: usize) -> Self {
        let err = PwError::new(format!("No {} at position {}", kind, index));
        let err = if len == 0 {
            err.with_context(format!("There are no {}s configured", kind))
        } else {
            err.with_context(format!("Valid positions are 0 to {}", len - 1))
        };
        err.with_suggestion(format!("List them: pw {} list", kind))
    }

    /// Error for platforms without a per-user configuration directory.
    pub fn no_config_dir() -> Self {
        PwError::new("Could not determine the configuration directory")
            .with_suggestion("Pass --config <path> or set PAGEWATCH_CONFIG")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PwError::new("Something went wrong")
            .with_context("First context")
            .with_context("Second context")
            .with_suggestion("Try this")
            .with_suggestion("Or this");

        let output = format!("{}", err);
        assert!(output.starts_with("Something went wrong"));
        assert!(output.contains("-> First context"));
        assert!(output.contains("-> Second context"));
        assert!(output.contains("1. Try this"));
        assert!(output.contains("2. Or this"));
    }

    #[test]
    fn test_no_such_entry_error() {
        let output = PwError::no_such_entry("rule", 4, 2).to_string();
        assert!(output.contains("No rule at position 4"));
        assert!(output.contains("0 to 1"));
        assert!(output.contains("pw rule list"));

        let empty = PwError::no_such_entry("target", 0, 0).to_string();
        assert!(empty.contains("no targets configured"));
    }
}
