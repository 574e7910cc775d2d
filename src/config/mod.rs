//! Configuration management for recap

mod io;
mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::analyzer::pipeline::PipelineOptions;
use crate::analyzer::window::AnalysisYearWindow;

impl Config {
    /// Get the config file path (~/.config/recap/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.analysis.validate()
    }

    /// Pipeline options for the configured year and segmenter.
    pub fn pipeline_options(&self) -> Result<PipelineOptions> {
        let window = AnalysisYearWindow::for_year(self.analysis.year)
            .with_context(|| format!("Year {} has no valid window", self.analysis.year))?;
        Ok(PipelineOptions {
            window,
            segmenter: self.analysis.segmenter,
        })
    }

    /// Worker timeout, `None` when disabled.
    pub fn timeout(&self) -> Option<Duration> {
        match self.analysis.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
