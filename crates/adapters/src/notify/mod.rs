// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification adapters

mod desktop;
mod noop;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use desktop::DesktopNotifier;
pub use noop::NoOpNotifier;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeNotifier;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification failed: {0}")]
    Failed(String),
    #[error("{program} exited with error: {stderr}")]
    Command { program: String, stderr: String },
}

/// A notification to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Adapter trait for notification delivery
#[async_trait]
pub trait Notifier: Clone + Send + Sync + 'static {
    /// Deliver a notification (best effort)
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError>;
}
