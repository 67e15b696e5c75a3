// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a positioned list: `"{index}: {item}"` per line as text, or the
/// records as a JSON array
pub fn print_list<T: Display, R: Serialize>(items: &[T], records: &[R], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for (index, item) in items.iter().enumerate() {
                println!("{}: {}", index, item);
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(records) {
                println!("{}", json);
            }
        }
    }
}
