// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake notifier for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Notification, Notifier, NotifyError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Fake notifier recording every notification it is given
#[derive(Clone, Default)]
pub struct FakeNotifier {
    calls: Arc<Mutex<Vec<Notification>>>,
    failing: Arc<AtomicBool>,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record notifications but report every delivery as failed
    pub fn failing() -> Self {
        let notifier = Self::default();
        notifier.failing.store(true, Ordering::SeqCst);
        notifier
    }

    /// Get all recorded notifications
    pub fn calls(&self) -> Vec<Notification> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notification);
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotifyError::Failed("fake delivery failure".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
