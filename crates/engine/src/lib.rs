// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pagewatch polling engine: rule dispatch and the background poll loop

mod config;
mod dispatch;
mod error;
mod poll;
mod scheduler;

pub use config::PollConfig;
pub use dispatch::{RuleDispatcher, NOTIFICATION_TITLE};
pub use error::ActionError;
pub use poll::{PollOutcome, PollStep};
pub use scheduler::{PollScheduler, SchedulerState};
