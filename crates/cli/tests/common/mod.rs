// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temp directory holding an isolated configuration file.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("monitor_config.json")
    }

    /// `pw` with `--config` pointing into this environment
    pub fn pw(&self) -> Command {
        let mut cmd = Command::cargo_bin("pw").expect("pw binary");
        cmd.env_remove("PAGEWATCH_CONFIG")
            .env("RUST_LOG", "warn")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }

    pub fn write_config(&self, json: &str) {
        std::fs::write(self.config_path(), json).expect("Failed to write config");
    }

    pub fn read_config(&self) -> serde_json::Value {
        read_json(&self.config_path())
    }
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).expect("Failed to read config");
    serde_json::from_str(&text).expect("Config is not valid JSON")
}
