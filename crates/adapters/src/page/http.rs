// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Static HTML page reader over HTTP

use super::{PageError, PageReader};
use async_trait::async_trait;
use pw_core::{Selector, SelectorKind};
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Timeout for navigations that are not bounded by the caller
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("pagewatch/", env!("CARGO_PKG_VERSION"));

struct LoadedPage {
    url: Url,
    html: String,
}

/// Page reader that fetches documents with `reqwest` and queries them with
/// `scraper`.
///
/// Pages are not rendered, so script-driven content is invisible and elements
/// can never be clicked directly. A forced click follows the element's link.
pub struct HttpPageReader {
    client: reqwest::Client,
    request_timeout: Duration,
    settle_delay: Duration,
    current: Option<LoadedPage>,
}

impl HttpPageReader {
    pub fn new() -> Result<Self, PageError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| PageError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            settle_delay: Duration::ZERO,
            current: None,
        })
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Pause after every page load before the page is queried
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    async fn load(&mut self, url: Url, timeout: Duration) -> Result<(), PageError> {
        let shown = url.to_string();
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| request_error(&shown, e))?;

        let final_url = response.url().clone();
        let html = response
            .text()
            .await
            .map_err(|e| request_error(&shown, e))?;

        tracing::debug!(url = %final_url, bytes = html.len(), "page loaded");
        self.current = Some(LoadedPage {
            url: final_url,
            html,
        });

        if !self.settle_delay.is_zero() {
            tokio::time::sleep(self.settle_delay).await;
        }
        Ok(())
    }

    fn page(&self) -> Result<&LoadedPage, PageError> {
        self.current
            .as_ref()
            .ok_or_else(|| PageError::NotFound("no page loaded".to_string()))
    }
}

#[async_trait]
impl PageReader for HttpPageReader {
    async fn fetch_value(
        &mut self,
        url: &str,
        selector: &Selector,
        timeout: Duration,
    ) -> Result<String, PageError> {
        // Reject before spending a request on it
        css_for(selector)?;
        self.load(parse_url(url)?, timeout).await?;
        extract_value(&self.page()?.html, selector)
    }

    async fn navigate(&mut self, url: &str) -> Result<(), PageError> {
        let timeout = self.request_timeout;
        self.load(parse_url(url)?, timeout).await
    }

    async fn click(&mut self, selector: &Selector) -> Result<(), PageError> {
        let page = self.page()?;
        select_first(&page.html, selector, |_| ())?;
        Err(PageError::NotInteractable(selector.to_string()))
    }

    async fn force_click(&mut self, selector: &Selector) -> Result<(), PageError> {
        let page = self.page()?;
        let target = link_target(&page.html, &page.url, selector)?;
        let timeout = self.request_timeout;
        self.load(target, timeout).await
    }
}

fn parse_url(url: &str) -> Result<Url, PageError> {
    Url::parse(url).map_err(|e| PageError::Request(format!("invalid url '{url}': {e}")))
}

fn request_error(url: &str, err: reqwest::Error) -> PageError {
    if err.is_timeout() {
        PageError::Timeout(url.to_string())
    } else {
        PageError::Request(format!("{url}: {err}"))
    }
}

/// Translate a selector into the CSS query that finds the same elements.
///
/// Id, class and name values are matched as literal attribute values, never
/// parsed as CSS.
pub(crate) fn css_for(selector: &Selector) -> Result<String, PageError> {
    let value = &selector.value;
    match selector.kind {
        SelectorKind::Id => Ok(format!("[id={}]", css_string(value))),
        SelectorKind::Class => {
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(PageError::Parse(format!(
                    "class selector '{value}' must be a single class name"
                )));
            }
            Ok(format!("[class~={}]", css_string(value)))
        }
        SelectorKind::Name => Ok(format!("[name={}]", css_string(value))),
        SelectorKind::Tag | SelectorKind::Css => Ok(value.clone()),
        SelectorKind::XPath => Err(PageError::UnsupportedSelector(SelectorKind::XPath)),
    }
}

/// Quote `value` as a CSS string literal
fn css_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            // A raw line break ends a CSS string
            '\n' => quoted.push_str("\\a "),
            '\r' => quoted.push_str("\\d "),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Run `f` on the first element matching `selector`.
///
/// The parsed document never outlives this call.
fn select_first<T>(
    html: &str,
    selector: &Selector,
    f: impl FnOnce(scraper::ElementRef<'_>) -> T,
) -> Result<T, PageError> {
    let css = css_for(selector)?;
    let query = scraper::Selector::parse(&css)
        .map_err(|e| PageError::Parse(format!("invalid selector '{css}': {e}")))?;
    let document = Html::parse_document(html);
    let element = document
        .select(&query)
        .next()
        .ok_or_else(|| PageError::NotFound(selector.to_string()))?;
    Ok(f(element))
}

/// Text, else `value` attribute, else inner markup of the matched element
pub(crate) fn extract_value(html: &str, selector: &Selector) -> Result<String, PageError> {
    select_first(html, selector, |element| {
        let text = element.text().collect::<Vec<_>>().join(" ");
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !text.is_empty() {
            return text;
        }
        match element.value().attr("value") {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => element.inner_html(),
        }
    })
}

/// Resolved `href` of the matched element
pub(crate) fn link_target(html: &str, base: &Url, selector: &Selector) -> Result<Url, PageError> {
    let href = select_first(html, selector, |element| {
        element.value().attr("href").map(str::to_string)
    })?
    .ok_or_else(|| PageError::NotInteractable(format!("{selector} has no link to follow")))?;

    base.join(&href)
        .map_err(|e| PageError::Parse(format!("bad link '{href}': {e}")))
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
