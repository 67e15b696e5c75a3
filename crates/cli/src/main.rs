// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pw - pagewatch CLI

mod commands;
mod completions;
mod error;
mod logging;
mod output;
mod paths;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, rule, run, target};
use pw_storage::ConfigStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pw",
    version,
    about = "pagewatch - watch page elements and act when they change"
)]
struct Cli {
    /// Configuration file (default: <config dir>/pagewatch/monitor_config.json)
    #[arg(long, global = true, env = "PAGEWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll every target until interrupted
    Run(run::RunArgs),
    /// Fetch one element once and print its value
    Check(check::CheckArgs),
    /// Manage monitoring targets
    Target(target::TargetArgs),
    /// Manage action rules
    Rule(rule::RuleArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Completions(args) = cli.command {
        completions::generate_completions::<Cli>(args.shell);
        return Ok(());
    }

    let _log_guard = logging::setup_logging(cli.log_file.as_deref())?;
    let store = ConfigStore::new(paths::resolve_config_path(cli.config)?);

    match cli.command {
        Commands::Run(args) => run::handle(args, &store).await,
        Commands::Check(args) => check::handle(args).await,
        Commands::Target(args) => target::handle(args.command, &store),
        Commands::Rule(args) => rule::handle(args.command, &store),
        Commands::Completions(_) => Ok(()),
    }
}
