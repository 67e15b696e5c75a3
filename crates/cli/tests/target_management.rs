// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for target management

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_target_list_empty() {
    let env = TestEnv::new();

    env.pw()
        .args(["target", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No targets configured."));
}

#[test]
fn test_target_add_then_list() {
    let env = TestEnv::new();

    env.pw()
        .args([
            "target",
            "add",
            "https://shop.example/item",
            "price",
            "--kind",
            "id",
            "--interval",
            "60",
            "--label",
            "Item price",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added target 0: Item price - price"));

    env.pw()
        .args(["target", "add", "https://news.example", "h1"])
        .assert()
        .success();

    env.pw()
        .args(["target", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0: Item price - price"))
        .stdout(predicate::str::contains("1: https://news.example - h1"));

    let config = env.read_config();
    assert_eq!(config["targets"][0]["selector_type"], "id");
    assert_eq!(config["targets"][0]["interval"], 60);
    assert_eq!(config["targets"][1]["selector_type"], "css");
    assert_eq!(config["targets"][1]["interval"], 30);
}

#[test]
fn test_target_list_json() {
    let env = TestEnv::new();
    env.pw()
        .args(["target", "add", "https://a.example", "#p"])
        .assert()
        .success();

    let out = env
        .pw()
        .args(["target", "list", "--output", "json"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let records: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(records[0]["url"], "https://a.example");
    assert_eq!(records[0]["selector"], "#p");
}

#[test]
fn test_target_remove_by_position() {
    let env = TestEnv::new();
    for url in ["https://a.example", "https://b.example", "https://c.example"] {
        env.pw().args(["target", "add", url, "p"]).assert().success();
    }

    env.pw()
        .args(["target", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed target: https://b.example"));

    let config = env.read_config();
    let urls: Vec<&str> = config["targets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["url"].as_str().unwrap())
        .collect();
    assert_eq!(urls, ["https://a.example", "https://c.example"]);
}

#[test]
fn test_target_remove_out_of_range() {
    let env = TestEnv::new();

    env.pw()
        .args(["target", "remove", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No target at position 3"));
}

#[test]
fn test_target_add_rejects_unknown_kind() {
    let env = TestEnv::new();

    env.pw()
        .args(["target", "add", "https://a.example", "p", "--kind", "jquery"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown selector kind"));

    assert!(!env.config_path().exists());
}

#[test]
fn test_target_add_rejects_zero_interval() {
    let env = TestEnv::new();

    env.pw()
        .args(["target", "add", "https://a.example", "p", "--interval", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("poll interval"));
}

#[test]
fn test_config_path_from_env() {
    let env = TestEnv::new();
    let path = env.dir.path().join("from-env.json");

    assert_cmd::Command::cargo_bin("pw")
        .unwrap()
        .env("PAGEWATCH_CONFIG", &path)
        .args(["target", "add", "https://a.example", "p"])
        .assert()
        .success();

    assert!(path.exists());
}

#[test]
fn test_broken_config_is_reported() {
    let env = TestEnv::new();
    env.write_config(r#"{"targets":[{"url":"u","selector":"p","selector_type":"link"}]}"#);

    env.pw()
        .args(["target", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}
