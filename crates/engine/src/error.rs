// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for rule dispatch

use pw_adapters::PageError;
use thiserror::Error;

/// A rule action that could not be carried out.
///
/// Reported to the event sink; never stops the poll loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("failed to open {url}: {source}")]
    Navigate { url: String, source: PageError },
    #[error("failed to click {selector}: {source}")]
    Click { selector: String, source: PageError },
}
