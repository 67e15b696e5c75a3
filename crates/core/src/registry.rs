// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered target registry and rule set
//!
//! Targets live in an arena keyed by [`TargetId`]; registration order is kept
//! separately and drives poll order. Rules are a plain ordered list since no
//! state is keyed on them.

use crate::rule::ActionRule;
use crate::target::{MonitorTarget, TargetId, ValidationError};

/// A target together with the id it was registered under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredTarget {
    pub id: TargetId,
    pub target: MonitorTarget,
}

/// Ordered list of monitoring targets
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    entries: Vec<RegisteredTarget>,
    next_id: u64,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from targets in order, rejecting the whole set if any is invalid
    pub fn from_targets(targets: Vec<MonitorTarget>) -> Result<Self, ValidationError> {
        let mut registry = Self::new();
        for target in targets {
            registry.add(target)?;
        }
        Ok(registry)
    }

    /// Register a target at the end of the poll order
    pub fn add(&mut self, target: MonitorTarget) -> Result<TargetId, ValidationError> {
        target.validate()?;
        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.entries.push(RegisteredTarget { id, target });
        Ok(id)
    }

    pub fn remove(&mut self, id: TargetId) -> Option<MonitorTarget> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos).target)
    }

    /// Replace every target; ids are never reused so stale tracker
    /// entries for the old set cannot alias the new one.
    pub fn replace(&mut self, targets: Vec<MonitorTarget>) -> Result<(), ValidationError> {
        for target in &targets {
            target.validate()?;
        }
        self.entries.clear();
        for target in targets {
            let id = TargetId(self.next_id);
            self.next_id += 1;
            self.entries.push(RegisteredTarget { id, target });
        }
        Ok(())
    }

    pub fn get(&self, id: TargetId) -> Option<&MonitorTarget> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.target)
    }

    pub fn contains(&self, id: TargetId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredTarget> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<TargetId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// Copy of the current poll order, for iterating without holding a lock
    pub fn snapshot(&self) -> Vec<RegisteredTarget> {
        self.entries.clone()
    }

    /// Targets in registration order, without ids (the persisted form)
    pub fn targets(&self) -> Vec<MonitorTarget> {
        self.entries.iter().map(|e| e.target.clone()).collect()
    }
}

/// Ordered list of rules; order is dispatch order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<ActionRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: Vec<ActionRule>) -> Result<Self, ValidationError> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self { rules })
    }

    pub fn add(&mut self, rule: ActionRule) -> Result<(), ValidationError> {
        rule.validate()?;
        self.rules.push(rule);
        Ok(())
    }


    pub fn replace(&mut self, rules: Vec<ActionRule>) -> Result<(), ValidationError> {
        *self = Self::from_rules(rules)?;
        Ok(())
    }

    pub fn rules(&self) -> &[ActionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
