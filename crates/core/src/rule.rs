// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action rules: a condition plus an optional click action and notification

use crate::selector::Selector;
use crate::target::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// When a rule fires for a detected change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "any_change")]
    AnyChange,
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "equals")]
    Equals,
    #[serde(rename = "greater")]
    GreaterThan,
    #[serde(rename = "less")]
    LessThan,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::AnyChange,
        Condition::Contains,
        Condition::Equals,
        Condition::GreaterThan,
        Condition::LessThan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::AnyChange => "any_change",
            Condition::Contains => "contains",
            Condition::Equals => "equals",
            Condition::GreaterThan => "greater",
            Condition::LessThan => "less",
        }
    }

    /// Whether the condition compares against `condition_value`
    pub fn needs_value(&self) -> bool {
        !matches!(self, Condition::AnyChange)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown condition: {0:?} (expected one of any_change, contains, equals, greater, less)")]
pub struct UnknownCondition(pub String);

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCondition(s.to_string()))
    }
}

/// A condition→action rule evaluated against every detected change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRule {
    pub condition: Condition,
    /// Ignored for [`Condition::AnyChange`]
    pub condition_value: Option<String>,
    /// Page to navigate to before acting
    pub action_url: Option<String>,
    /// Element to click after navigation. Carrying the selector and its kind
    /// together keeps the "both or neither" pairing by construction.
    pub action_selector: Option<Selector>,
    pub notify: bool,
    pub label: String,
}

impl ActionRule {
    pub fn new(condition: Condition) -> Self {
        Self {
            condition,
            condition_value: None,
            action_url: None,
            action_selector: None,
            notify: true,
            label: String::new(),
        }
    }

    pub fn any_change() -> Self {
        Self::new(Condition::AnyChange)
    }

    pub fn contains(value: impl Into<String>) -> Self {
        Self::new(Condition::Contains).with_value(value)
    }

    pub fn equals(value: impl Into<String>) -> Self {
        Self::new(Condition::Equals).with_value(value)
    }

    pub fn greater_than(value: impl Into<String>) -> Self {
        Self::new(Condition::GreaterThan).with_value(value)
    }

    pub fn less_than(value: impl Into<String>) -> Self {
        Self::new(Condition::LessThan).with_value(value)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.condition_value = Some(value.into());
        self
    }

    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }

    pub fn with_click(mut self, selector: Selector) -> Self {
        self.action_selector = Some(selector);
        self
    }

    pub fn with_notify(mut self, notify: bool) -> Self {
        self.notify = notify;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.condition.needs_value() && self.condition_value.is_none() {
            return Err(ValidationError::MissingConditionValue(
                self.condition.to_string(),
            ));
        }
        if let Some(selector) = &self.action_selector {
            if selector.value.trim().is_empty() {
                return Err(ValidationError::EmptySelector);
            }
        }
        if self.action_url.as_deref().is_some_and(|u| u.trim().is_empty()) {
            return Err(ValidationError::EmptyUrl);
        }
        Ok(())
    }
}

impl fmt::Display for ActionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.label.is_empty() {
            self.condition.as_str()
        } else {
            self.label.as_str()
        };
        match &self.action_selector {
            Some(selector) => write!(f, "{} - {}", name, selector.value),
            None => write!(f, "{} - notify only", name),
        }
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
