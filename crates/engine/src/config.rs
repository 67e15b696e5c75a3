// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine tunables

use pw_core::DEFAULT_PREVIEW_CHARS;
use std::time::Duration;

/// Timing and sizing knobs for the poll loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    /// Upper bound on one value fetch
    pub fetch_timeout: Duration,
    /// How long `stop()` waits for the loop to exit
    pub stop_timeout: Duration,
    /// Characters of each value kept in change descriptions
    pub preview_chars: usize,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
            stop_timeout: Duration::from_secs(5),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}
