// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for rule management

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_rule_add_notify_only() {
    let env = TestEnv::new();

    env.pw()
        .args(["rule", "add", "any_change"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added rule 0: any_change - notify only"));

    let config = env.read_config();
    assert_eq!(config["rules"][0]["condition"], "any_change");
    assert_eq!(config["rules"][0]["notify"], true);
    assert!(config["rules"][0]["action_selector"].is_null());
    assert!(config["rules"][0]["action_selector_type"].is_null());
}

#[test]
fn test_rule_add_with_click_action() {
    let env = TestEnv::new();

    env.pw()
        .args([
            "rule",
            "add",
            "less",
            "--value",
            "9.99",
            "--action-url",
            "https://shop.example/item",
            "--click",
            "add-to-cart",
            "--click-kind",
            "id",
            "--no-notify",
            "--label",
            "buy cheap",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("buy cheap - add-to-cart"));

    let rule = &env.read_config()["rules"][0];
    assert_eq!(rule["condition"], "less");
    assert_eq!(rule["condition_value"], "9.99");
    assert_eq!(rule["action_url"], "https://shop.example/item");
    assert_eq!(rule["action_selector"], "add-to-cart");
    assert_eq!(rule["action_selector_type"], "id");
    assert_eq!(rule["notify"], false);
    assert_eq!(rule["description"], "buy cheap");
}

#[test]
fn test_rule_add_requires_value_for_comparisons() {
    let env = TestEnv::new();

    env.pw()
        .args(["rule", "add", "greater"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a condition value"));

    assert!(!env.config_path().exists());
}

#[test]
fn test_rule_add_rejects_unknown_condition() {
    let env = TestEnv::new();

    env.pw()
        .args(["rule", "add", "between", "--value", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown condition"));
}

#[test]
fn test_rules_keep_order_and_targets() {
    let env = TestEnv::new();
    env.pw()
        .args(["target", "add", "https://a.example", "p"])
        .assert()
        .success();
    env.pw()
        .args(["rule", "add", "contains", "--value", "X", "--label", "A"])
        .assert()
        .success();
    env.pw()
        .args(["rule", "add", "any_change", "--label", "B"])
        .assert()
        .success();

    env.pw()
        .args(["rule", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0: A - notify only\n1: B - notify only"));

    env.pw().args(["rule", "remove", "0"]).assert().success();

    let config = env.read_config();
    assert_eq!(config["rules"].as_array().unwrap().len(), 1);
    assert_eq!(config["rules"][0]["description"], "B");
    assert_eq!(config["targets"].as_array().unwrap().len(), 1);
}

#[test]
fn test_rule_remove_out_of_range() {
    let env = TestEnv::new();

    env.pw()
        .args(["rule", "remove", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No rule at position 0"));
}
