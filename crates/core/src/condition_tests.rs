// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[test]
fn any_change_compares_old_and_new() {
    let rule = ActionRule::any_change();
    assert!(matches(&rule, "a", "b"));
    assert!(!matches(&rule, "a", "a"));
    assert!(matches(&rule, "", "a"));
    assert!(!matches(&rule, "", ""));
}

#[parameterized(
    substring = { "X", "aXb", true },
    whole = { "aX", "aX", true },
    missing = { "X", "abc", false },
    case_sensitive = { "x", "aXb", false },
    empty_value_never_matches = { "", "anything", false },
    unicode = { "库存", "有库存", true },
)]
fn contains_is_exact_substring(value: &str, new: &str, expected: bool) {
    let rule = ActionRule::contains(value);
    assert_eq!(matches(&rule, "old", new), expected);
}

#[test]
fn contains_without_value_never_matches() {
    let rule = ActionRule::new(Condition::Contains);
    assert!(!matches(&rule, "old", "new"));
}

#[test]
fn equals_ignores_old_value() {
    let rule = ActionRule::equals("in stock");
    assert!(matches(&rule, "in stock", "in stock"));
    assert!(matches(&rule, "sold out", "in stock"));
    assert!(!matches(&rule, "in stock", "In stock"));
}

#[parameterized(
    above = { "12", "10", true },
    equal_never_matches = { "10", "10", false },
    below = { "9.5", "10", false },
    decimal = { "10.01", "10", true },
    negative = { "-1", "-2", true },
    whitespace_is_trimmed = { " 12 ", "10", true },
    non_numeric_new = { "$12", "10", false },
    non_numeric_value = { "12", "ten", false },
    empty_new = { "", "10", false },
)]
fn greater_than_is_strict_numeric(new: &str, value: &str, expected: bool) {
    let rule = ActionRule::greater_than(value);
    assert_eq!(matches(&rule, "0", new), expected);
}

#[parameterized(
    below = { "5", "10", true },
    equal_never_matches = { "10", "10.0", false },
    above = { "11", "10", false },
    non_numeric = { "n/a", "10", false },
)]
fn less_than_is_strict_numeric(new: &str, value: &str, expected: bool) {
    let rule = ActionRule::less_than(value);
    assert_eq!(matches(&rule, "0", new), expected);
}

#[test]
fn numeric_without_value_never_matches() {
    assert!(!matches(&ActionRule::new(Condition::GreaterThan), "1", "2"));
    assert!(!matches(&ActionRule::new(Condition::LessThan), "2", "1"));
}

#[test]
fn matching_keeps_rule_order() {
    let rules = [
        ActionRule::contains("X").with_label("A"),
        ActionRule::equals("zzz").with_label("never"),
        ActionRule::any_change().with_label("B"),
    ];

    let labels: Vec<&str> = matching(&rules, "a", "aX")
        .into_iter()
        .map(|r| r.label.as_str())
        .collect();

    assert_eq!(labels, ["A", "B"]);
}

#[test]
fn matching_unchanged_value_only_hits_value_rules() {
    let rules = [ActionRule::any_change(), ActionRule::equals("5")];

    let matched = matching(&rules, "5", "5");

    assert_eq!(matched, [&ActionRule::equals("5")]);
}

proptest! {
    #[test]
    fn any_change_matches_iff_values_differ(old in ".*", new in ".*") {
        let rule = ActionRule::any_change();
        prop_assert_eq!(matches(&rule, &old, &new), old != new);
    }

    #[test]
    fn equals_depends_only_on_new(old in ".*", new in ".*", value in ".*") {
        let rule = ActionRule::equals(value.clone());
        prop_assert_eq!(matches(&rule, &old, &new), new == value);
    }

    #[test]
    fn numeric_rules_never_match_non_numeric_input(
        old in ".*",
        new in "[a-zA-Z ]*[%$#][a-zA-Z0-9%$ ]*",
        value in "-?[0-9]{1,6}(\\.[0-9]{1,3})?",
    ) {
        prop_assert!(!matches(&ActionRule::greater_than(value.clone()), &old, &new));
        prop_assert!(!matches(&ActionRule::less_than(value.clone()), &old, &new));
        // Swapping sides: a non-numeric condition value never matches either
        prop_assert!(!matches(&ActionRule::greater_than(new.clone()), &old, &value));
        prop_assert!(!matches(&ActionRule::less_than(new), &old, &value));
    }
}
