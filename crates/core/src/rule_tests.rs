// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    any_change = { "any_change", Condition::AnyChange },
    contains = { "contains", Condition::Contains },
    equals = { "equals", Condition::Equals },
    greater = { "greater", Condition::GreaterThan },
    less = { "less", Condition::LessThan },
)]
fn condition_names_round_trip(s: &str, expected: Condition) {
    assert_eq!(s.parse::<Condition>().unwrap(), expected);
    assert_eq!(expected.to_string(), s);
}

#[test]
fn unknown_condition_is_rejected() {
    assert_eq!(
        "greater_than".parse::<Condition>(),
        Err(UnknownCondition("greater_than".to_string()))
    );
}

#[test]
fn new_rule_notifies_by_default() {
    let rule = ActionRule::any_change();
    assert!(rule.notify);
    assert_eq!(rule.action_url, None);
    assert_eq!(rule.action_selector, None);
    assert_eq!(rule.validate(), Ok(()));
}

#[test]
fn value_conditions_require_a_value() {
    let rule = ActionRule::new(Condition::Contains);
    assert_eq!(
        rule.validate(),
        Err(ValidationError::MissingConditionValue("contains".to_string()))
    );
    assert_eq!(ActionRule::contains("X").validate(), Ok(()));
}

#[test]
fn action_selector_must_not_be_blank() {
    let rule = ActionRule::any_change().with_click(Selector::css(" "));
    assert_eq!(rule.validate(), Err(ValidationError::EmptySelector));
}

#[test]
fn display_shows_action_or_notify_only() {
    let rule = ActionRule::greater_than("10");
    assert_eq!(rule.to_string(), "greater - notify only");

    let rule = ActionRule::any_change()
        .with_label("Buy")
        .with_action_url("https://shop.example/cart")
        .with_click(Selector::id("checkout"));
    assert_eq!(rule.to_string(), "Buy - checkout");
}
