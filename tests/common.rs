//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out temporary project directories with a
//! checklist dataset and an intro file.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Dataset shaped like a real project checklist.
pub const SAMPLE_CHECKLIST: &str = r#"[
    {
        "item": "Minify HTML",
        "resources": ["https://github.com/kangax/html-minifier"]
    },
    {
        "item": "Serve assets with HTTP/2"
    },
    {
        "item": "Optimize images, fonts and icons",
        "resources": ["https://tinypng.com/", "https://squoosh.app/"]
    },
    {
        "item": "Audit third party scripts",
        "resources": []
    }
]"#;

pub const SAMPLE_INTRO: &str = "# Front-End Performance Checklist";

/// Expected rendering of [`SAMPLE_INTRO`] followed by [`SAMPLE_CHECKLIST`].
pub const SAMPLE_README: &str = "# Front-End Performance Checklist\n\
- [ ] Minify HTML [Resource #1](https://github.com/kangax/html-minifier)\n\
- [ ] Serve assets with HTTP/2\n\
- [ ] Optimize images, fonts and icons [Resource #1](https://tinypng.com/), [Resource #2](https://squoosh.app/)\n\
- [ ] Audit third party scripts\n";

/// Creates temporary project with `checklist.json` and `intro.md`.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_test_project(checklist: &str, intro: &str) -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "checklist.json", checklist)?;
    write_file(dir.path(), "intro.md", intro)?;
    Ok(dir)
}

/// Writes file to project, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
