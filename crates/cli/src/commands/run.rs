// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Foreground monitor

use crate::error::PwError;
use anyhow::{bail, Result};
use clap::Args;
use pw_adapters::{
    DesktopNotifier, HttpPageReader, NoOpNotifier, Notifier, TracedNotifier, TracedPageReader,
};
use pw_core::{EventSink, RuleSet, TargetRegistry};
use pw_engine::{PollConfig, PollScheduler};
use pw_storage::ConfigStore;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Args)]
pub struct RunArgs {
    /// Log changes without desktop notifications
    #[arg(long)]
    no_notify: bool,
    /// Seconds to wait for each page load
    #[arg(long, default_value_t = 10)]
    fetch_timeout: u64,
    /// Seconds to let a page settle after loading
    #[arg(long, default_value_t = 2)]
    settle_delay: u64,
}

pub async fn handle(args: RunArgs, store: &ConfigStore) -> Result<()> {
    let mut registry = TargetRegistry::new();
    let mut rules = RuleSet::new();
    store.load_into(&mut registry, &mut rules)?;
    if registry.is_empty() {
        return Err(PwError::no_targets(store.path()).into());
    }

    let config = PollConfig {
        fetch_timeout: Duration::from_secs(args.fetch_timeout),
        ..PollConfig::default()
    };
    // Action navigation is bounded like a fetch; the reader settles after every load
    let reader = HttpPageReader::new()?
        .with_request_timeout(config.fetch_timeout)
        .with_settle_delay(Duration::from_secs(args.settle_delay));

    tracing::info!(
        config = %store.path().display(),
        targets = registry.len(),
        rules = rules.len(),
        notify = !args.no_notify,
        "starting monitor"
    );
    println!("Starting pagewatch");
    println!("  Config: {}", store.path().display());
    println!("  Targets: {}", registry.len());
    println!("  Rules: {}", rules.len());
    println!();

    if args.no_notify {
        monitor(reader, NoOpNotifier::new(), registry, rules, config).await
    } else {
        monitor(reader, DesktopNotifier::default(), registry, rules, config).await
    }
}

async fn monitor<N: Notifier>(
    reader: HttpPageReader,
    notifier: N,
    registry: TargetRegistry,
    rules: RuleSet,
    config: PollConfig,
) -> Result<()> {
    let events = EventSink::new();
    let mut stream = events.subscribe();

    let mut scheduler = PollScheduler::new(
        TracedPageReader::new(reader),
        TracedNotifier::new(notifier),
        events,
        config,
    )
    .with_registry(registry, rules);

    let shutdown = CancellationToken::new();
    let s = shutdown.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nStopping monitor...");
        s.cancel();
    })?;

    if !scheduler.start() {
        bail!("monitor did not start");
    }

    loop {
        tokio::select! {
            event = stream.recv() => match event {
                Some(event) => println!("{event}"),
                None => break,
            },
            _ = shutdown.cancelled() => break,
        }
    }

    scheduler.stop().await;
    while let Ok(event) = stream.try_recv() {
        println!("{event}");
    }
    tracing::info!(
        tracked = scheduler.last_values().len(),
        "monitor stopped"
    );
    Ok(())
}
