//! Command handlers for the recap CLI.
//!
//! Each submodule handles one CLI command or command group.
//! The dispatch logic remains in main.rs.

pub mod analyze;
pub mod config;
pub mod worker;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use recap::ParsedBundle;

/// Read and parse a bundle JSON file.
pub fn load_bundle(path: &Path) -> Result<ParsedBundle> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read bundle file: {:?}", path))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse bundle file: {:?}", path))
}
