//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analyzer::segment::SegmenterKind;
use crate::analyzer::window::AnalysisYearWindow;

/// Largest accepted `analysis.timeout_secs`.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the pipeline runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    /// Background worker thread
    #[default]
    Worker,
    /// Inline on the calling thread
    Sync,
}

impl RunMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Worker => "worker",
            RunMode::Sync => "sync",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "worker" => Ok(RunMode::Worker),
            "sync" => Ok(RunMode::Sync),
            other => Err(format!("Unknown mode '{}'. Valid: worker, sync", other)),
        }
    }
}

/// `[analysis]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Review year; the window is that calendar year in UTC
    #[serde(default = "default_year")]
    pub year: i32,
    #[serde(default)]
    pub segmenter: SegmenterKind,
    #[serde(default)]
    pub mode: RunMode,
    /// 0 disables the timeout
    #[serde(default)]
    pub timeout_secs: u64,
}

pub fn default_year() -> i32 {
    AnalysisYearWindow::DEFAULT_YEAR
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            year: default_year(),
            segmenter: SegmenterKind::default(),
            mode: RunMode::default(),
            timeout_secs: 0,
        }
    }
}

impl AnalysisSettings {
    /// Returns the first out-of-range value, if any.
    pub fn validate(&self) -> Result<(), String> {
        if !(1970..=9999).contains(&self.year) {
            return Err(format!(
                "analysis.year {} is out of range (1970-9999)",
                self.year
            ));
        }
        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(format!(
                "analysis.timeout_secs {} exceeds maximum ({}s)",
                self.timeout_secs, MAX_TIMEOUT_SECS
            ));
        }
        Ok(())
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print the result JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Suppress the progress line on stderr
    #[serde(default)]
    pub quiet: bool,
}

pub fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            quiet: false,
        }
    }
}
