//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Command line configuration for checklistgen.
///
/// Relative data, intro, and output paths are resolved against `root`, so
/// running without arguments inside a project reads `checklist.json` and
/// `intro.md` and writes `README.md`.
#[derive(Debug, Clone, Parser)]
#[command(name = "checklistgen", version, about, long_about = None)]
pub struct Config {
    /// Project root directory
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Checklist dataset (JSON)
    #[arg(short, long, default_value = "checklist.json")]
    pub data: PathBuf,

    /// Introduction placed above the checklist
    #[arg(short, long, default_value = "intro.md")]
    pub intro: PathBuf,

    /// Generated markdown file
    #[arg(short, long, default_value = "README.md")]
    pub output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Creates configuration rooted at `root` with default file names.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            data: PathBuf::from("checklist.json"),
            intro: PathBuf::from("intro.md"),
            output: PathBuf::from("README.md"),
            verbose: 0,
        }
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if root path does not exist or is not a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            bail!("Project root does not exist: {}", self.root.display());
        }
        if !self.root.is_dir() {
            bail!("Project root is not a directory: {}", self.root.display());
        }

        Ok(())
    }

    /// Returns dataset path resolved against root.
    pub fn data_path(&self) -> PathBuf {
        self.resolve(&self.data)
    }

    /// Returns intro path resolved against root.
    pub fn intro_path(&self) -> PathBuf {
        self.resolve(&self.intro)
    }

    /// Returns output path resolved against root.
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}
