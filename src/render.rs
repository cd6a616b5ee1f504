//! Markdown checklist rendering.
//!
//! Turns checklist items into GitHub task list lines. Item text and
//! resource URLs are emitted as given; nothing is escaped.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::checklist::ChecklistItem;
use crate::error::ChecklistError;

/// Markdown task list marker for an unchecked item.
const CHECKBOX: &str = "- [ ] ";

static TRAILING_COMMA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*$").expect("valid trailing comma regex"));

/// Renders complete checklist document.
///
/// Output is `prefix`, a newline, then one task line per item in input
/// order. Every line, including the last, ends with a newline.
///
/// # Arguments
///
/// * `prefix`: Introduction text placed above the checklist
/// * `items`: Checklist items in rendering order
///
/// # Errors
///
/// Returns [`ChecklistError::EmptyDataset`] if `items` is empty.
pub fn render(prefix: &str, items: &[ChecklistItem]) -> Result<String, ChecklistError> {
    if items.is_empty() {
        return Err(ChecklistError::EmptyDataset);
    }

    let mut output = String::with_capacity(prefix.len() + 1 + items.len() * 64);
    output.push_str(prefix);
    output.push('\n');

    for item in items {
        output.push_str(&render_item(item));
    }

    debug!("Rendered {} checklist lines", items.len());
    Ok(output)
}

/// Renders single item as a task list line, newline included.
///
/// Produces `- [ ] <item>` followed by ` [Resource #n](url)` links joined
/// with commas. Numbering starts at 1 for each item.
pub fn render_item(item: &ChecklistItem) -> String {
    let mut line = String::from(CHECKBOX);
    line.push_str(&item.item);
    line.push_str(&render_resources(item.resources()));
    line.push('\n');
    line
}

/// Builds the inline resource link segment for an item.
fn render_resources(resources: &[String]) -> String {
    if resources.is_empty() {
        return String::new();
    }

    let segment: String = resources
        .iter()
        .enumerate()
        .map(|(index, url)| format!(" [Resource #{}]({}),", index + 1, url))
        .collect();

    // Trim is anchored to the resource segment, not the whole line
    TRAILING_COMMA_RE.replace(&segment, "").into_owned()
}
