// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire format of the persisted configuration document

use pw_core::{
    ActionRule, Condition, MonitorTarget, Selector, SelectorKind, DEFAULT_POLL_INTERVAL_SECS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rule record whose click selector and selector kind are not paired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnpairedSelector {
    #[error("action_selector has no action_selector_type")]
    MissingKind,
    #[error("action_selector_type has no action_selector")]
    MissingSelector,
}

/// Conversion failure pinned to the offending rule record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rule {index}: {source}")]
pub struct RecordError {
    pub index: usize,
    pub source: UnpairedSelector,
}

/// The whole persisted configuration. Record order is preserved exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub targets: Vec<TargetRecord>,
    #[serde(default)]
    pub rules: Vec<RuleRecord>,
}

impl ConfigDocument {
    pub fn from_parts(targets: &[MonitorTarget], rules: &[ActionRule]) -> Self {
        Self {
            targets: targets.iter().map(TargetRecord::from).collect(),
            rules: rules.iter().map(RuleRecord::from).collect(),
        }
    }

    /// Convert every record into its domain type.
    ///
    /// Fails on the first rule whose action selector and kind are not
    /// both present or both absent.
    pub fn into_parts(self) -> Result<(Vec<MonitorTarget>, Vec<ActionRule>), RecordError> {
        let targets = self.targets.into_iter().map(MonitorTarget::from).collect();
        let rules = self
            .rules
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                ActionRule::try_from(record).map_err(|source| RecordError { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((targets, rules))
    }
}

fn default_interval() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_notify() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub url: String,
    pub selector: String,
    pub selector_type: SelectorKind,
    #[serde(default = "default_interval")]
    pub interval: u64,
    #[serde(default)]
    pub description: String,
}

impl From<&MonitorTarget> for TargetRecord {
    fn from(target: &MonitorTarget) -> Self {
        Self {
            url: target.url.clone(),
            selector: target.selector.value.clone(),
            selector_type: target.selector.kind,
            interval: target.poll_interval_secs,
            description: target.label.clone(),
        }
    }
}

impl From<TargetRecord> for MonitorTarget {
    fn from(record: TargetRecord) -> Self {
        MonitorTarget::new(
            record.url,
            Selector::new(record.selector, record.selector_type),
        )
        .with_interval(record.interval)
        .with_label(record.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    pub condition: Condition,
    #[serde(default)]
    pub condition_value: Option<String>,
    #[serde(default)]
    pub action_url: Option<String>,
    #[serde(default)]
    pub action_selector: Option<String>,
    #[serde(default)]
    pub action_selector_type: Option<SelectorKind>,
    #[serde(default = "default_notify")]
    pub notify: bool,
    #[serde(default)]
    pub description: String,
}

impl From<&ActionRule> for RuleRecord {
    fn from(rule: &ActionRule) -> Self {
        Self {
            condition: rule.condition,
            condition_value: rule.condition_value.clone(),
            action_url: rule.action_url.clone(),
            action_selector: rule.action_selector.as_ref().map(|s| s.value.clone()),
            action_selector_type: rule.action_selector.as_ref().map(|s| s.kind),
            notify: rule.notify,
            description: rule.label.clone(),
        }
    }
}

impl TryFrom<RuleRecord> for ActionRule {
    type Error = UnpairedSelector;

    fn try_from(record: RuleRecord) -> Result<Self, Self::Error> {
        // An empty form field is stored as "" by some writers; treat it as unset
        let action_url = record.action_url.filter(|u| !u.is_empty());
        let action_selector = match (
            record.action_selector.filter(|s| !s.is_empty()),
            record.action_selector_type,
        ) {
            (Some(value), Some(kind)) => Some(Selector::new(value, kind)),
            (None, None) => None,
            (Some(_), None) => return Err(UnpairedSelector::MissingKind),
            (None, Some(_)) => return Err(UnpairedSelector::MissingSelector),
        };

        Ok(ActionRule {
            condition: record.condition,
            condition_value: record.condition_value,
            action_url,
            action_selector,
            notify: record.notify,
            label: record.description,
        })
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
