// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Selector model: how to locate a value inside a fetched page

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The strategy used to interpret a selector string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    Id,
    Class,
    #[serde(rename = "xpath")]
    XPath,
    Css,
    Name,
    Tag,
}

impl SelectorKind {
    pub const ALL: [SelectorKind; 6] = [
        SelectorKind::Id,
        SelectorKind::Class,
        SelectorKind::XPath,
        SelectorKind::Css,
        SelectorKind::Name,
        SelectorKind::Tag,
    ];

    /// The persisted string form (`id|class|xpath|css|name|tag`)
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorKind::Id => "id",
            SelectorKind::Class => "class",
            SelectorKind::XPath => "xpath",
            SelectorKind::Css => "css",
            SelectorKind::Name => "name",
            SelectorKind::Tag => "tag",
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selector kind: {0:?} (expected one of id, class, xpath, css, name, tag)")]
pub struct UnknownSelectorKind(pub String);

impl FromStr for SelectorKind {
    type Err = UnknownSelectorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectorKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownSelectorKind(s.to_string()))
    }
}

/// A selector string paired with the kind that interprets it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    pub value: String,
    pub kind: SelectorKind,
}

impl Selector {
    pub fn new(value: impl Into<String>, kind: SelectorKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    pub fn css(value: impl Into<String>) -> Self {
        Self::new(value, SelectorKind::Css)
    }

    pub fn id(value: impl Into<String>) -> Self {
        Self::new(value, SelectorKind::Id)
    }

    pub fn xpath(value: impl Into<String>) -> Self {
        Self::new(value, SelectorKind::XPath)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.kind)
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
