// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON file store for the monitor configuration

use crate::document::{ConfigDocument, RecordError};
use pw_core::{ActionRule, MonitorTarget, RuleSet, TargetRegistry, ValidationError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name used under the per-user configuration directory
pub const CONFIG_FILE_NAME: &str = "monitor_config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid configuration in {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Loads and saves the whole configuration document at one path.
///
/// Saves always replace the file completely; there is no merging with
/// what is already on disk.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw document. A missing file yields an empty document.
    pub fn load_document(&self) -> Result<ConfigDocument, ConfigError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no config file, starting empty");
                return Ok(ConfigDocument::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Load and validate targets and rules, in document order
    pub fn load(&self) -> Result<(Vec<MonitorTarget>, Vec<ActionRule>), ConfigError> {
        let (targets, rules) = self
            .load_document()?
            .into_parts()
            .map_err(|e: RecordError| self.invalid(e))?;

        for (index, target) in targets.iter().enumerate() {
            target
                .validate()
                .map_err(|e| self.invalid_record("target", index, e))?;
        }
        for (index, rule) in rules.iter().enumerate() {
            rule.validate()
                .map_err(|e| self.invalid_record("rule", index, e))?;
        }

        tracing::info!(
            path = %self.path.display(),
            targets = targets.len(),
            rules = rules.len(),
            "config loaded"
        );
        Ok((targets, rules))
    }

    /// Load into live collections.
    ///
    /// Nothing is modified unless the whole document parses and validates.
    pub fn load_into(
        &self,
        registry: &mut TargetRegistry,
        rule_set: &mut RuleSet,
    ) -> Result<(), ConfigError> {
        let (targets, rules) = self.load()?;
        registry
            .replace(targets)
            .map_err(|e| self.invalid(e))?;
        rule_set.replace(rules).map_err(|e| self.invalid(e))?;
        Ok(())
    }

    /// Serialize targets and rules, replacing the file
    pub fn save(
        &self,
        targets: &[MonitorTarget],
        rules: &[ActionRule],
    ) -> Result<ConfigDocument, ConfigError> {
        let document = ConfigDocument::from_parts(targets, rules);
        self.save_document(&document)?;
        Ok(document)
    }

    /// Write `document` to a sibling temp file and rename it into place
    pub fn save_document(&self, document: &ConfigDocument) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(document).map_err(|e| self.write_error(e.into()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, json).map_err(|e| self.write_error(e))?;
        // Atomic replace (rename is atomic on POSIX)
        fs::rename(&temp_path, &self.path).map_err(|e| self.write_error(e))?;

        tracing::info!(
            path = %self.path.display(),
            targets = document.targets.len(),
            rules = document.rules.len(),
            "config saved"
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| CONFIG_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn invalid(&self, reason: impl ToString) -> ConfigError {
        ConfigError::Invalid {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn invalid_record(&self, kind: &str, index: usize, err: ValidationError) -> ConfigError {
        self.invalid(format!("{kind} {index}: {err}"))
    }

    fn write_error(&self, source: io::Error) -> ConfigError {
        ConfigError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
