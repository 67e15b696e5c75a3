// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file location

use crate::error::PwError;
use pw_storage::CONFIG_FILE_NAME;
use std::path::PathBuf;

/// Use `explicit` when given (flag or `PAGEWATCH_CONFIG`), else the per-user
/// config directory.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, PwError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    dirs::config_dir()
        .map(|dir| dir.join("pagewatch").join(CONFIG_FILE_NAME))
        .ok_or_else(PwError::no_config_dir)
}
