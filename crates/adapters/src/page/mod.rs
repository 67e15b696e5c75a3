// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Page reader adapters

mod http;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use http::HttpPageReader;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePageReader, PageCall};

use async_trait::async_trait;
use pw_core::{Selector, SelectorKind};
use std::time::Duration;
use thiserror::Error;

/// Errors from page reader operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("element not found: {0}")]
    NotFound(String),
    #[error("timed out loading {0}")]
    Timeout(String),
    #[error("element not interactable: {0}")]
    NotInteractable(String),
    #[error("selector kind '{0}' is not supported by this reader")]
    UnsupportedSelector(SelectorKind),
    #[error("request failed: {0}")]
    Request(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Adapter for reading and interacting with remote pages.
///
/// A reader holds one "current page" at a time, so every method takes
/// `&mut self`: whoever owns the reader drives it exclusively.
#[async_trait]
pub trait PageReader: Send + 'static {
    /// Load `url` and return the value of the first element matching `selector`.
    ///
    /// The value is the element's text, else its `value` attribute, else its
    /// inner markup; the first non-empty one wins.
    async fn fetch_value(
        &mut self,
        url: &str,
        selector: &Selector,
        timeout: Duration,
    ) -> Result<String, PageError>;

    /// Make `url` the current page
    async fn navigate(&mut self, url: &str) -> Result<(), PageError>;

    /// Click an element on the current page.
    ///
    /// Returns `NotInteractable` when a direct click is rejected; callers
    /// may then try [`PageReader::force_click`].
    async fn click(&mut self, selector: &Selector) -> Result<(), PageError>;

    /// Click an element bypassing interactability checks
    async fn force_click(&mut self, selector: &Selector) -> Result<(), PageError>;
}
