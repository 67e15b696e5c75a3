// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitoring targets

use crate::selector::Selector;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Default seconds between two checks of the same target
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Durable identifier assigned to a target when it is registered.
///
/// Unlike a list position, a `TargetId` survives removal of other targets,
/// so change tracking keyed by it cannot drift onto the wrong target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Errors from constructing targets and rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("url must not be empty")]
    EmptyUrl,
    #[error("selector must not be empty")]
    EmptySelector,
    #[error("poll interval must be at least one second")]
    ZeroInterval,
    #[error("condition {0} requires a condition value")]
    MissingConditionValue(String),
}

/// One (URL, selector) pair polled on a fixed interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorTarget {
    pub url: String,
    pub selector: Selector,
    pub poll_interval_secs: u64,
    /// Display label; may be empty
    pub label: String,
}

impl MonitorTarget {
    pub fn new(url: impl Into<String>, selector: Selector) -> Self {
        Self {
            url: url.into(),
            selector,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            label: String::new(),
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.poll_interval_secs = secs;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// Label for display, falling back to the URL
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.url
        } else {
            &self.label
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        if self.selector.value.trim().is_empty() {
            return Err(ValidationError::EmptySelector);
        }
        if self.poll_interval_secs == 0 {
            return Err(ValidationError::ZeroInterval);
        }
        Ok(())
    }
}

impl fmt::Display for MonitorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.display_name(), self.selector.value)
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
