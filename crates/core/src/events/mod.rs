// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Status events flowing from the poll loop to observers
//!
//! This module provides:
//! - `StatusEvent` - a timestamped, human-readable status or error line
//! - `EventSink` - non-blocking producer handle, cloneable across tasks
//! - `EventStream` - consumer side handed out by `EventSink::subscribe`

mod sink;

pub use sink::{EventKind, EventSink, EventStream, StatusEvent};
