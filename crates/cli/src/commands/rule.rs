// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rule commands

use crate::error::PwError;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use clap::{Args, Subcommand};
use pw_core::{ActionRule, Condition, Selector, SelectorKind};
use pw_storage::{ConfigStore, RuleRecord};

#[derive(Args)]
pub struct RuleArgs {
    #[command(subcommand)]
    pub command: RuleCommand,
}

#[derive(Subcommand)]
pub enum RuleCommand {
    /// Add a rule, evaluated after all existing rules
    Add {
        /// When to fire (any_change, contains, equals, greater, less)
        condition: Condition,
        /// Value compared against (required unless any_change)
        #[arg(long)]
        value: Option<String>,
        /// Page to open before clicking
        #[arg(long)]
        action_url: Option<String>,
        /// Element to click
        #[arg(long)]
        click: Option<String>,
        /// How to interpret --click (id, class, xpath, css, name, tag)
        #[arg(long, default_value = "css", requires = "click")]
        click_kind: SelectorKind,
        /// Do not send a desktop notification
        #[arg(long)]
        no_notify: bool,
        /// Display name
        #[arg(long, default_value = "")]
        label: String,
    },
    /// List rules in evaluation order
    List {
        #[arg(long, value_enum, default_value_t)]
        output: OutputFormat,
    },
    /// Remove the rule at a list position
    Remove {
        /// Position as shown by `pw rule list`
        index: usize,
    },
}

pub fn handle(command: RuleCommand, store: &ConfigStore) -> Result<()> {
    let (targets, mut rules) = store.load()?;

    match command {
        RuleCommand::Add {
            condition,
            value,
            action_url,
            click,
            click_kind,
            no_notify,
            label,
        } => {
            let mut rule = ActionRule::new(condition)
                .with_notify(!no_notify)
                .with_label(label);
            // The value is ignored for any_change, so don't store one
            if let Some(value) = value.filter(|_| condition.needs_value()) {
                rule = rule.with_value(value);
            }
            if let Some(url) = action_url {
                rule = rule.with_action_url(url);
            }
            if let Some(selector) = click {
                rule = rule.with_click(Selector::new(selector, click_kind));
            }
            rule.validate()?;
            println!("Added rule {}: {}", rules.len(), rule);
            rules.push(rule);
            store.save(&targets, &rules)?;
        }
        RuleCommand::List { output } => {
            if rules.is_empty() && matches!(output, OutputFormat::Text) {
                println!("No rules configured.");
                return Ok(());
            }
            let records: Vec<RuleRecord> = rules.iter().map(RuleRecord::from).collect();
            output::print_list(&rules, &records, output);
        }
        RuleCommand::Remove { index } => {
            if index >= rules.len() {
                return Err(PwError::no_such_entry("rule", index, rules.len()).into());
            }
            let removed = rules.remove(index);
            store.save(&targets, &rules)?;
            println!("Removed rule: {}", removed);
        }
    }
    Ok(())
}
