//! Checklist document generation.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::checklist::load_checklist;
use crate::config::Config;
use crate::render::render;

/// Outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Path the document was written to.
    pub output: PathBuf,
    /// Number of checklist items rendered.
    pub items: usize,
    /// Total resource links across all items.
    pub resources: usize,
}

/// Reads introduction text used as the document prefix.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid UTF8.
pub fn load_intro(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read intro from {}", path.display()))
}

/// Generates checklist document from configured dataset and intro.
///
/// Loads the dataset, loads the intro, renders, then writes the result as
/// UTF8, replacing any existing file. Nothing is written when loading or
/// rendering fails.
///
/// # Arguments
///
/// * `config`: Resolved paths for dataset, intro, and output
///
/// # Returns
///
/// Summary of the written document
///
/// # Errors
///
/// Returns error wrapping [`crate::ChecklistError::EmptyDataset`] if the
/// dataset has no items, or an I/O or JSON error naming the failing path.
pub fn generate(config: &Config) -> Result<GenerationSummary> {
    let data_path = config.data_path();
    let items = load_checklist(&data_path)?;
    info!("Loaded {} items from {}", items.len(), data_path.display());

    let intro = load_intro(&config.intro_path())?;

    let document = render(&intro, &items)
        .with_context(|| format!("Failed to render checklist from {}", data_path.display()))?;

    let output = config.output_path();
    fs::write(&output, document)
        .with_context(|| format!("Failed to write checklist to {}", output.display()))?;
    info!("Wrote {}", output.display());

    Ok(GenerationSummary {
        output,
        items: items.len(),
        resources: items.iter().map(|item| item.resources().len()).sum(),
    })
}
