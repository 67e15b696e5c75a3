// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Last-seen value per target

use crate::target::TargetId;
use std::collections::HashMap;

/// Result of recording a freshly fetched value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// No prior value; the new value becomes the baseline
    Baseline,
    /// Same value as last time
    Unchanged,
    /// Value differs from the previous observation
    Changed { old: String },
}

/// Holds the last observed value per target.
///
/// An empty stored value means "no value yet", so a transition away from an
/// empty value counts as establishing the baseline rather than a change.
#[derive(Debug, Clone, Default)]
pub struct ChangeTracker {
    last: HashMap<TargetId, String>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for `id`, always overwriting the stored value
    pub fn observe(&mut self, id: TargetId, value: &str) -> Observation {
        let previous = self.last.insert(id, value.to_string());
        match previous {
            Some(old) if old.is_empty() => Observation::Baseline,
            Some(old) if old == value => Observation::Unchanged,
            Some(old) => Observation::Changed { old },
            None => Observation::Baseline,
        }
    }

    pub fn get(&self, id: TargetId) -> Option<&str> {
        self.last.get(&id).map(String::as_str)
    }

    /// Drop entries for targets no longer registered
    pub fn retain_ids(&mut self, live: &[TargetId]) {
        self.last.retain(|id, _| live.contains(id));
    }

    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }

    pub fn snapshot(&self) -> HashMap<TargetId, String> {
        self.last.clone()
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
