// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Condition evaluation against a detected change

use crate::rule::{ActionRule, Condition};

/// Check whether `rule` fires for a change from `old` to `new`.
///
/// Pure: numeric conditions that cannot parse either side simply don't match.
pub fn matches(rule: &ActionRule, old: &str, new: &str) -> bool {
    let value = rule.condition_value.as_deref();
    match rule.condition {
        Condition::AnyChange => old != new,
        Condition::Contains => value.is_some_and(|v| !v.is_empty() && new.contains(v)),
        Condition::Equals => value.is_some_and(|v| new == v),
        Condition::GreaterThan => compare(new, value).is_some_and(|(n, v)| n > v),
        Condition::LessThan => compare(new, value).is_some_and(|(n, v)| n < v),
    }
}

/// Rules from `rules` that fire for a change from `old` to `new`, in rule
/// order. Each rule is evaluated exactly once.
pub fn matching<'a>(rules: &'a [ActionRule], old: &str, new: &str) -> Vec<&'a ActionRule> {
    rules
        .iter()
        .filter(|rule| matches(rule, old, new))
        .collect()
}

fn compare(new: &str, value: Option<&str>) -> Option<(f64, f64)> {
    let n = parse_number(new)?;
    let v = parse_number(value?)?;
    Some((n, v))
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
