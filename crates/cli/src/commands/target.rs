// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target commands

use crate::error::PwError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::{Args, Subcommand};
use pw_core::{MonitorTarget, Selector, SelectorKind, DEFAULT_POLL_INTERVAL_SECS};
use pw_storage::{ConfigStore, TargetRecord};

#[derive(Args)]
pub struct TargetArgs {
    #[command(subcommand)]
    pub command: TargetCommand,
}

#[derive(Subcommand)]
pub enum TargetCommand {
    /// Add a target to the end of the poll order
    Add {
        /// Page to poll
        url: String,
        /// Selector locating the watched element
        selector: String,
        /// How to interpret the selector (id, class, xpath, css, name, tag)
        #[arg(long, default_value = "css")]
        kind: SelectorKind,
        /// Seconds between checks
        #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL_SECS)]
        interval: u64,
        /// Display name (defaults to the URL)
        #[arg(long, default_value = "")]
        label: String,
    },
    /// List targets in poll order
    List {
        #[arg(long, value_enum, default_value_t)]
        output: OutputFormat,
    },
    /// Remove the target at a list position
    Remove {
        /// Position as shown by `pw target list`
        index: usize,
    },
}

pub fn handle(command: TargetCommand, store: &ConfigStore) -> Result<()> {
    let (mut targets, rules) = store.load()?;

    match command {
        TargetCommand::Add {
            url,
            selector,
            kind,
            interval,
            label,
        } => {
            let target = MonitorTarget::new(url, Selector::new(selector, kind))
                .with_interval(interval)
                .with_label(label);
            target.validate()?;
            println!("Added target {}: {}", targets.len(), target);
            targets.push(target);
            store.save(&targets, &rules)?;
        }
        TargetCommand::List { output } => {
            if targets.is_empty() && matches!(output, OutputFormat::Text) {
                println!("No targets configured.");
                return Ok(());
            }
            let records: Vec<TargetRecord> = targets.iter().map(TargetRecord::from).collect();
            output::print_list(&targets, &records, output);
        }
        TargetCommand::Remove { index } => {
            if index >= targets.len() {
                return Err(PwError::no_such_entry("target", index, targets.len()).into());
            }
            let removed = targets.remove(index);
            store.save(&targets, &rules)?;
            println!("Removed target: {}", removed);
        }
    }
    Ok(())
}
