// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Background poll loop with cooperative cancellation
//!
//! The scheduler owns the page reader. While running, the reader lives inside
//! the loop task; when the loop exits it is handed back through a slot so the
//! scheduler can be started again.

use crate::config::PollConfig;
use crate::poll::PollStep;
use pw_adapters::{Notifier, PageReader};
use pw_core::{
    ActionRule, ChangeTracker, EventSink, RegisteredTarget, RuleSet, TargetId, TargetRegistry,
    DEFAULT_POLL_INTERVAL_SECS,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Lifecycle state of the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running,
}

struct RunningLoop {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Drives the poll loop over the shared target registry and rule set.
///
/// Registry and rules may be edited through their handles while running.
/// Each pass works from a copy of the target list taken at the start of the
/// pass; a target removed mid-pass is skipped, and its tracker entry is
/// dropped at the start of the next pass.
pub struct PollScheduler<P, N> {
    registry: Arc<RwLock<TargetRegistry>>,
    rules: Arc<RwLock<RuleSet>>,
    tracker: Arc<Mutex<ChangeTracker>>,
    reader: Arc<Mutex<Option<P>>>,
    notifier: N,
    events: EventSink,
    config: PollConfig,
    running: Option<RunningLoop>,
}

impl<P, N> PollScheduler<P, N>
where
    P: PageReader,
    N: Notifier,
{
    pub fn new(reader: P, notifier: N, events: EventSink, config: PollConfig) -> Self {
        Self {
            registry: Arc::new(RwLock::new(TargetRegistry::new())),
            rules: Arc::new(RwLock::new(RuleSet::new())),
            tracker: Arc::new(Mutex::new(ChangeTracker::new())),
            reader: Arc::new(Mutex::new(Some(reader))),
            notifier,
            events,
            config,
            running: None,
        }
    }

    /// Use existing registry and rules instead of empty ones
    pub fn with_registry(mut self, registry: TargetRegistry, rules: RuleSet) -> Self {
        self.registry = Arc::new(RwLock::new(registry));
        self.rules = Arc::new(RwLock::new(rules));
        self
    }

    /// Shared handle to the target registry
    pub fn registry(&self) -> Arc<RwLock<TargetRegistry>> {
        Arc::clone(&self.registry)
    }

    /// Shared handle to the rule set
    pub fn rules(&self) -> Arc<RwLock<RuleSet>> {
        Arc::clone(&self.rules)
    }

    pub fn events(&self) -> &EventSink {
        &self.events
    }

    /// Copy of the last value seen per target
    pub fn last_values(&self) -> HashMap<TargetId, String> {
        self.tracker
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .snapshot()
    }

    pub fn state(&self) -> SchedulerState {
        match &self.running {
            Some(running) if !running.handle.is_finished() => SchedulerState::Running,
            _ => SchedulerState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == SchedulerState::Running
    }

    /// Start the poll loop on the current tokio runtime.
    ///
    /// Returns false without doing anything if already running, if there
    /// are no targets, or if the reader has not been handed back by a
    /// previous loop that is still finishing.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            tracing::warn!("start refused: already running");
            return false;
        }
        let target_count = read(&self.registry).len();
        if target_count == 0 {
            tracing::warn!("start refused: no targets");
            return false;
        }
        let Some(reader) = self.reader.lock().unwrap_or_else(|e| e.into_inner()).take() else {
            tracing::warn!("start refused: page reader still in use");
            return false;
        };

        let cancel = CancellationToken::new();
        let poll_loop = PollLoop {
            registry: Arc::clone(&self.registry),
            rules: Arc::clone(&self.rules),
            tracker: Arc::clone(&self.tracker),
            step: PollStep::new(
                self.notifier.clone(),
                Arc::clone(&self.tracker),
                self.events.clone(),
                self.config.clone(),
            ),
            cancel: cancel.clone(),
        };
        let slot = Arc::clone(&self.reader);
        let handle = tokio::spawn(async move {
            let reader = poll_loop.run(reader).await;
            *slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(reader);
        });

        self.running = Some(RunningLoop { cancel, handle });
        tracing::info!(targets = target_count, "poll loop started");
        self.events
            .info(format!("Monitoring started ({target_count} targets)"));
        true
    }

    /// Request cancellation and wait, bounded by `stop_timeout`, for the
    /// loop to exit.
    ///
    /// Returns true if the loop exited in time. On timeout the loop keeps
    /// finishing its current target in the background and hands the reader
    /// back when it is done.
    pub async fn stop(&mut self) -> bool {
        let Some(RunningLoop { cancel, mut handle }) = self.running.take() else {
            return true;
        };
        cancel.cancel();

        let joined = match tokio::time::timeout(self.config.stop_timeout, &mut handle).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                tracing::error!(error = %e, "poll loop task failed");
                true
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.config.stop_timeout.as_millis() as u64,
                    "poll loop did not exit in time"
                );
                false
            }
        };

        if joined {
            self.events.info("Monitoring stopped");
        } else {
            self.events
                .info("Monitoring stopping; current check is still finishing");
        }
        joined
    }

    /// Take the page reader back once the scheduler is idle
    pub fn take_reader(&mut self) -> Option<P> {
        if self.is_running() {
            return None;
        }
        self.reader.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}

struct PollLoop<N> {
    registry: Arc<RwLock<TargetRegistry>>,
    rules: Arc<RwLock<RuleSet>>,
    tracker: Arc<Mutex<ChangeTracker>>,
    step: PollStep<N>,
    cancel: CancellationToken,
}

impl<N: Notifier> PollLoop<N> {
    async fn run<P: PageReader>(self, mut reader: P) -> P {
        'passes: loop {
            let targets = self.begin_pass();
            if targets.is_empty() {
                // Every target was removed while running; idle until stopped
                if self.pause(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS)).await {
                    break 'passes;
                }
                continue;
            }

            for entry in targets {
                if self.cancel.is_cancelled() {
                    break 'passes;
                }
                if !read(&self.registry).contains(entry.id) {
                    tracing::debug!(target_id = %entry.id, "skipping removed target");
                    continue;
                }

                let rules = self.rules_snapshot();
                let outcome = self.step.run(&mut reader, &entry, &rules).await;
                tracing::debug!(target_id = %entry.id, ?outcome, "polled");

                if self.pause(entry.target.poll_interval()).await {
                    break 'passes;
                }
            }
        }
        tracing::info!("poll loop exited");
        reader
    }

    /// Copy the target list and forget values of targets that are gone
    fn begin_pass(&self) -> Vec<RegisteredTarget> {
        let targets = read(&self.registry).snapshot();
        let live: Vec<TargetId> = targets.iter().map(|e| e.id).collect();
        self.tracker
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .retain_ids(&live);
        targets
    }

    fn rules_snapshot(&self) -> Vec<ActionRule> {
        read(&self.rules).rules().to_vec()
    }

    /// Sleep for `duration`; returns true if cancelled first
    async fn pause(&self, duration: Duration) -> bool {
        tokio::select! {
            _ = self.cancel.cancelled() => true,
            _ = tokio::time::sleep(duration) => false,
        }
    }
}

fn read<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
