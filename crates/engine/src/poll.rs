// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One check of one target: fetch, compare, evaluate, dispatch

use crate::config::PollConfig;
use crate::dispatch::RuleDispatcher;
use pw_adapters::{Notifier, PageError, PageReader};
use pw_core::{
    condition, ActionRule, Change, ChangeTracker, EventSink, Observation, RegisteredTarget,
};
use std::sync::{Arc, Mutex};

/// What a single poll of a target did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// First value seen; stored, nothing evaluated
    Baseline,
    Unchanged,
    /// Value changed; `matched` rules were dispatched
    Changed { matched: usize },
    /// The fetch failed; the stored value is untouched
    Failed(PageError),
}

/// Everything needed to poll a target except the reader itself
#[derive(Clone)]
pub struct PollStep<N> {
    dispatcher: RuleDispatcher<N>,
    tracker: Arc<Mutex<ChangeTracker>>,
    events: EventSink,
    config: PollConfig,
}

impl<N: Notifier> PollStep<N> {
    pub fn new(
        notifier: N,
        tracker: Arc<Mutex<ChangeTracker>>,
        events: EventSink,
        config: PollConfig,
    ) -> Self {
        Self {
            dispatcher: RuleDispatcher::new(notifier, events.clone()),
            tracker,
            events,
            config,
        }
    }

    /// Poll `entry` once, dispatching every matching rule in order
    pub async fn run<P: PageReader>(
        &self,
        reader: &mut P,
        entry: &RegisteredTarget,
        rules: &[ActionRule],
    ) -> PollOutcome {
        let target = &entry.target;
        let name = target.display_name();

        let value = match reader
            .fetch_value(&target.url, &target.selector, self.config.fetch_timeout)
            .await
        {
            Ok(value) => value,
            Err(e) => {
                self.events.error(format!("Failed to read {name}: {e}"));
                return PollOutcome::Failed(e);
            }
        };

        let old = match self.observe(entry, &value) {
            Observation::Baseline => {
                tracing::debug!(target_id = %entry.id, "baseline recorded");
                return PollOutcome::Baseline;
            }
            Observation::Unchanged => return PollOutcome::Unchanged,
            Observation::Changed { old } => old,
        };

        let change = Change::new(entry.id, name, old, value);
        let description = change.describe(self.config.preview_chars);
        self.events.change(description.as_str());

        let matched = condition::matching(rules, &change.old, &change.new);
        tracing::info!(target_id = %entry.id, matched = matched.len(), "change detected");

        for rule in &matched {
            if let Err(e) = self.dispatcher.dispatch(reader, rule, &description).await {
                // Already published to the event sink
                tracing::debug!(target_id = %entry.id, error = %e, "rule action failed");
            }
        }
        PollOutcome::Changed {
            matched: matched.len(),
        }
    }

    fn observe(&self, entry: &RegisteredTarget, value: &str) -> Observation {
        self.tracker
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .observe(entry.id, value)
    }
}

#[cfg(test)]
#[path = "poll_tests.rs"]
mod tests;
