//! Markdown checklist generator.

mod checklist;
mod config;
mod error;
mod generators;
pub mod logging;
mod render;

pub use checklist::{ChecklistDocument, ChecklistItem, load_checklist, parse_checklist};
pub use config::Config;
pub use error::ChecklistError;
pub use generators::{GenerationSummary, generate, load_intro};
pub use render::{render, render_item};
