// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pw-core: data model and pure logic for the pagewatch monitor
//!
//! This crate provides:
//! - Selector, target and rule types
//! - The condition evaluator
//! - Target registry (stable ids) and rule set
//! - Change tracking and the status event sink

pub mod change;
pub mod condition;
pub mod events;
pub mod registry;
pub mod rule;
pub mod selector;
pub mod target;
pub mod tracker;

pub use change::{truncate_chars, Change, DEFAULT_PREVIEW_CHARS};
pub use condition::{matches, matching};
pub use events::{EventKind, EventSink, EventStream, StatusEvent};
pub use registry::{RegisteredTarget, RuleSet, TargetRegistry};
pub use rule::{ActionRule, Condition, UnknownCondition};
pub use selector::{Selector, SelectorKind, UnknownSelectorKind};
pub use target::{MonitorTarget, TargetId, ValidationError, DEFAULT_POLL_INTERVAL_SECS};
pub use tracker::{ChangeTracker, Observation};
