// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake page reader for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{PageError, PageReader};
use async_trait::async_trait;
use pw_core::Selector;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded page reader call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCall {
    Fetch { url: String, selector: Selector },
    Navigate { url: String },
    Click { selector: Selector },
    ForceClick { selector: Selector },
}

#[derive(Default)]
struct FakeState {
    scripts: HashMap<String, VecDeque<Result<String, PageError>>>,
    calls: Vec<PageCall>,
    reject_clicks: bool,
    fail_force_clicks: bool,
}

/// Fake page reader replaying scripted values per URL.
///
/// Clones share state, so a test can keep a handle after moving the reader
/// into a scheduler. The last scripted result for a URL repeats once the
/// queue is drained.
#[derive(Clone, Default)]
pub struct FakePageReader {
    state: Arc<Mutex<FakeState>>,
}

impl FakePageReader {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue successive values returned for `url`
    pub fn script<I, S>(&self, url: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = self.lock();
        let queue = state.scripts.entry(url.to_string()).or_default();
        queue.extend(values.into_iter().map(|v| Ok(v.into())));
    }

    /// Queue a failure for the next fetch of `url`
    pub fn push_error(&self, url: &str, error: PageError) {
        self.lock()
            .scripts
            .entry(url.to_string())
            .or_default()
            .push_back(Err(error));
    }

    /// Make direct clicks fail with `NotInteractable`
    pub fn reject_clicks(&self) {
        self.lock().reject_clicks = true;
    }

    /// Make forced clicks fail with `NotInteractable`
    pub fn fail_force_clicks(&self) {
        self.lock().fail_force_clicks = true;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<PageCall> {
        self.lock().calls.clone()
    }

    /// Number of fetches made against `url`
    pub fn fetch_count(&self, url: &str) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| matches!(call, PageCall::Fetch { url: u, .. } if u == url))
            .count()
    }
}

#[async_trait]
impl PageReader for FakePageReader {
    async fn fetch_value(
        &mut self,
        url: &str,
        selector: &Selector,
        _timeout: Duration,
    ) -> Result<String, PageError> {
        let mut state = self.lock();
        state.calls.push(PageCall::Fetch {
            url: url.to_string(),
            selector: selector.clone(),
        });

        let Some(queue) = state.scripts.get_mut(url) else {
            return Err(PageError::NotFound(selector.to_string()));
        };
        if queue.len() > 1 {
            queue
                .pop_front()
                .unwrap_or_else(|| Err(PageError::NotFound(selector.to_string())))
        } else {
            queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(PageError::NotFound(selector.to_string())))
        }
    }

    async fn navigate(&mut self, url: &str) -> Result<(), PageError> {
        self.lock().calls.push(PageCall::Navigate {
            url: url.to_string(),
        });
        Ok(())
    }

    async fn click(&mut self, selector: &Selector) -> Result<(), PageError> {
        let mut state = self.lock();
        state.calls.push(PageCall::Click {
            selector: selector.clone(),
        });
        if state.reject_clicks {
            return Err(PageError::NotInteractable(selector.to_string()));
        }
        Ok(())
    }

    async fn force_click(&mut self, selector: &Selector) -> Result<(), PageError> {
        let mut state = self.lock();
        state.calls.push(PageCall::ForceClick {
            selector: selector.clone(),
        });
        if state.fail_force_clicks {
            return Err(PageError::NotInteractable(selector.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
