// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pw-storage: persisted monitor configuration

mod document;
mod store;

pub use document::{ConfigDocument, RecordError, RuleRecord, TargetRecord, UnpairedSelector};
pub use store::{ConfigError, ConfigStore, CONFIG_FILE_NAME};
