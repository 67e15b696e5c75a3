// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Carries out a matched rule: notification, navigation, click

use crate::error::ActionError;
use pw_adapters::{Notification, Notifier, PageError, PageReader};
use pw_core::{ActionRule, EventSink, Selector};

/// Title of every change notification
pub const NOTIFICATION_TITLE: &str = "Data change notification";

/// Runs matched rules against the page reader and notifier.
///
/// Failures are published to the event sink and returned, never retried.
/// Waiting for a page to settle after navigation is the reader's job.
#[derive(Clone)]
pub struct RuleDispatcher<N> {
    notifier: N,
    events: EventSink,
}

impl<N: Notifier> RuleDispatcher<N> {
    pub fn new(notifier: N, events: EventSink) -> Self {
        Self { notifier, events }
    }

    pub async fn dispatch<P: PageReader>(
        &self,
        reader: &mut P,
        rule: &ActionRule,
        description: &str,
    ) -> Result<(), ActionError> {
        if rule.notify {
            let notification = Notification::new(NOTIFICATION_TITLE, description);
            if let Err(e) = self.notifier.notify(notification).await {
                // Best effort
                tracing::warn!(error = %e, "notification dropped");
            }
        }

        let result = self.act(reader, rule).await;
        if let Err(e) = &result {
            self.events.error(format!("Action failed: {e}"));
        }
        result
    }

    async fn act<P: PageReader>(&self, reader: &mut P, rule: &ActionRule) -> Result<(), ActionError> {
        if let Some(url) = &rule.action_url {
            reader
                .navigate(url)
                .await
                .map_err(|source| ActionError::Navigate {
                    url: url.clone(),
                    source,
                })?;
        }

        if let Some(selector) = &rule.action_selector {
            click_with_fallback(reader, selector)
                .await
                .map_err(|source| ActionError::Click {
                    selector: selector.value.clone(),
                    source,
                })?;
            self.events
                .action(format!("Performed action: click {}", selector.value));
        }
        Ok(())
    }
}

/// Direct click, then a forced click if the element rejected it
async fn click_with_fallback<P: PageReader>(
    reader: &mut P,
    selector: &Selector,
) -> Result<(), PageError> {
    match reader.click(selector).await {
        Err(PageError::NotInteractable(reason)) => {
            tracing::debug!(%selector, %reason, "direct click rejected, forcing");
            reader.force_click(selector).await
        }
        other => other,
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
