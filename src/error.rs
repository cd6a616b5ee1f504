//! Domain errors for checklist generation.

use thiserror::Error;

/// Errors raised while turning a checklist dataset into Markdown.
///
/// I/O and decoding failures are not represented here; they travel as
/// `anyhow::Error` with the offending path attached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChecklistError {
    /// Dataset contained zero items.
    #[error("checklist dataset is empty: there doesn't appear to be any items")]
    EmptyDataset,
}
