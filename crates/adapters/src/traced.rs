// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::notify::{Notification, Notifier, NotifyError};
use crate::page::{PageError, PageReader};
use async_trait::async_trait;
use pw_core::Selector;
use std::time::{Duration, Instant};
use tracing::Instrument;

/// Wrapper that adds tracing to any PageReader
#[derive(Clone)]
pub struct TracedPageReader<P> {
    inner: P,
}

impl<P> TracedPageReader<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

#[async_trait]
impl<P: PageReader> PageReader for TracedPageReader<P> {
    async fn fetch_value(
        &mut self,
        url: &str,
        selector: &Selector,
        timeout: Duration,
    ) -> Result<String, PageError> {
        let span = tracing::info_span!("page.fetch", url, selector = %selector);
        async {
            tracing::debug!(timeout_ms = timeout.as_millis() as u64, "starting");

            let start = Instant::now();
            let result = self.inner.fetch_value(url, selector, timeout).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(value) => tracing::info!(elapsed_ms, value_len = value.len(), "value read"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "fetch failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn navigate(&mut self, url: &str) -> Result<(), PageError> {
        let span = tracing::info_span!("page.navigate", url);
        async {
            let start = Instant::now();
            let result = self.inner.navigate(url).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "navigated"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "navigate failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn click(&mut self, selector: &Selector) -> Result<(), PageError> {
        let span = tracing::info_span!("page.click", selector = %selector);
        async {
            let result = self.inner.click(selector).await;
            // Rejection is expected for some elements; callers fall back
            match &result {
                Ok(()) => tracing::info!("clicked"),
                Err(e) => tracing::debug!(error = %e, "click rejected"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn force_click(&mut self, selector: &Selector) -> Result<(), PageError> {
        let span = tracing::info_span!("page.force_click", selector = %selector);
        async {
            let result = self.inner.force_click(selector).await;
            match &result {
                Ok(()) => tracing::info!("clicked"),
                Err(e) => tracing::error!(error = %e, "forced click failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any Notifier
#[derive(Clone)]
pub struct TracedNotifier<N> {
    inner: N,
}

impl<N> TracedNotifier<N> {
    pub fn new(inner: N) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<N: Notifier> Notifier for TracedNotifier<N> {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        let span = tracing::info_span!("notify", title = %notification.title);
        async {
            tracing::debug!(message_len = notification.message.len(), "sending");

            let start = Instant::now();
            let result = self.inner.notify(notification).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "delivered"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "delivery failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
