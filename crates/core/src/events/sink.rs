// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event sink fanning status lines out to subscribers

use chrono::{DateTime, Local};
use std::fmt;
use std::sync::{Arc, RwLock};
use tokio::sync::mpsc;

/// What a status line reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Lifecycle and informational messages
    Info,
    /// A target's value changed
    Change,
    /// A rule action ran
    Action,
    /// A recoverable failure (fetch, click, ...)
    Error,
}

/// One status line, stamped when it was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEvent {
    pub at: DateTime<Local>,
    pub kind: EventKind,
    pub message: String,
}

impl StatusEvent {
    pub fn new(kind: EventKind, message: impl Into<String>) -> Self {
        Self {
            at: Local::now(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at.format("%Y-%m-%d %H:%M:%S"), self.message)
    }
}

/// Receiver for status events
pub type EventStream = mpsc::UnboundedReceiver<StatusEvent>;

/// Producer handle for status events.
///
/// Channels are unbounded so a slow observer never stalls the poll loop.
/// Events published with no subscribers are dropped.
#[derive(Clone, Default)]
pub struct EventSink {
    subscribers: Arc<RwLock<Vec<mpsc::UnboundedSender<StatusEvent>>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive every event published after this call
    pub fn subscribe(&self) -> EventStream {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(tx);
        rx
    }

    pub fn publish(&self, event: StatusEvent) {
        let mut subs = self.subscribers.write().unwrap_or_else(|e| e.into_inner());
        // Closed receivers are pruned as they are discovered
        subs.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.publish(StatusEvent::new(EventKind::Info, message));
    }

    pub fn change(&self, message: impl Into<String>) {
        self.publish(StatusEvent::new(EventKind::Change, message));
    }

    pub fn action(&self, message: impl Into<String>) {
        self.publish(StatusEvent::new(EventKind::Action, message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.publish(StatusEvent::new(EventKind::Error, message));
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
