// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-off selector test

use anyhow::{bail, Result};
use clap::Args;
use pw_adapters::{HttpPageReader, PageError, PageReader, TracedPageReader};
use pw_core::{truncate_chars, Selector, SelectorKind};
use std::time::Duration;

/// Characters of the value shown by `pw check`
const CHECK_PREVIEW_CHARS: usize = 200;

#[derive(Args)]
pub struct CheckArgs {
    /// Page to load
    url: String,
    /// Selector locating the element
    selector: String,
    /// How to interpret the selector (id, class, xpath, css, name, tag)
    #[arg(long, default_value = "css")]
    kind: SelectorKind,
    /// Seconds to wait for the page
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

pub async fn handle(args: CheckArgs) -> Result<()> {
    let selector = Selector::new(args.selector, args.kind);
    let mut reader = TracedPageReader::new(HttpPageReader::new()?);

    match reader
        .fetch_value(&args.url, &selector, Duration::from_secs(args.timeout))
        .await
    {
        Ok(value) => {
            println!("Found element, value:");
            println!("{}", truncate_chars(&value, CHECK_PREVIEW_CHARS));
            Ok(())
        }
        Err(PageError::NotFound(_)) => bail!("Element not found: {selector}"),
        Err(e) => Err(e.into()),
    }
}
