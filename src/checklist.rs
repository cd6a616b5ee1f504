//! Checklist dataset model and JSON loading.

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Single checklist entry with optional resource links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChecklistItem {
    /// Task description, rendered verbatim.
    pub item: String,

    /// Resource URLs, rendered as numbered links in order.
    pub resources: Option<Vec<String>>,
}

impl ChecklistItem {
    /// Creates item without resources.
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            resources: None,
        }
    }

    /// Creates item with resource URLs.
    pub fn with_resources<I, S>(item: impl Into<String>, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            item: item.into(),
            resources: Some(resources.into_iter().map(Into::into).collect()),
        }
    }

    /// Returns resource URLs, treating an absent list as empty.
    pub fn resources(&self) -> &[String] {
        self.resources.as_deref().unwrap_or_default()
    }
}

/// Ordered checklist dataset. Order is rendering order.
pub type ChecklistDocument = Vec<ChecklistItem>;

/// Parses checklist dataset from JSON text.
///
/// Expects a top level array of `{ "item": ..., "resources": [...] }`
/// objects. Unknown fields are ignored.
///
/// # Errors
///
/// Returns error if JSON is malformed or an entry lacks the `item` field.
pub fn parse_checklist(json: &str) -> Result<ChecklistDocument> {
    let items: ChecklistDocument =
        serde_json::from_str(json).context("Failed to parse checklist JSON")?;
    debug!("Parsed {} checklist items", items.len());
    Ok(items)
}

/// Reads and parses checklist dataset from file.
///
/// # Errors
///
/// Returns error if file cannot be read or does not contain valid checklist JSON.
pub fn load_checklist(path: &Path) -> Result<ChecklistDocument> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read checklist from {}", path.display()))?;

    parse_checklist(&json).with_context(|| format!("Invalid checklist in {}", path.display()))
}
