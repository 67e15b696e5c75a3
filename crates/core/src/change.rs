// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A detected change between two consecutive successful fetches

use crate::target::TargetId;

/// Maximum characters of each value included in a change description
pub const DEFAULT_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub target: TargetId,
    /// Display name of the target (label, or URL if unlabeled)
    pub name: String,
    pub old: String,
    pub new: String,
}

impl Change {
    pub fn new(
        target: TargetId,
        name: impl Into<String>,
        old: impl Into<String>,
        new: impl Into<String>,
    ) -> Self {
        Self {
            target,
            name: name.into(),
            old: old.into(),
            new: new.into(),
        }
    }

    /// Human-readable description with both values cut to `max_chars`
    pub fn describe(&self, max_chars: usize) -> String {
        format!(
            "{} changed:\nold: {}\nnew: {}",
            self.name,
            truncate_chars(&self.old, max_chars),
            truncate_chars(&self.new, max_chars)
        )
    }
}

/// Cut `s` to at most `max` characters (not bytes)
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
