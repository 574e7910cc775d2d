//! Progress state and terminal reporting.
//!
//! [`AnalysisProgress`] is what an analysis session exposes to its caller.
//! [`DefaultProgressReporter`] draws a single updating line on stderr for
//! the CLI.

use std::io::{self, Write};
use std::cell::Cell;

use super::pipeline::AnalysisStage;

/// Message shown while a run is being set up.
pub const PREPARING_MESSAGE: &str = "Preparing analysis...";

/// Latest progress of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisProgress {
    pub stage: AnalysisStage,
    /// 0-100
    pub progress: u8,
    pub message: String,
}

impl AnalysisProgress {
    /// State of a session that is not running.
    pub fn idle() -> Self {
        Self {
            stage: AnalysisStage::Parsing,
            progress: 0,
            message: String::new(),
        }
    }

    /// State right after a run starts.
    pub fn preparing() -> Self {
        Self {
            stage: AnalysisStage::Parsing,
            progress: 0,
            message: PREPARING_MESSAGE.to_string(),
        }
    }

    /// Build from a pipeline report, folding the keyword stage into text.
    pub fn from_report(stage: AnalysisStage, progress: u8, message: &str) -> Self {
        Self {
            stage: session_stage(stage),
            progress,
            message: message.to_string(),
        }
    }
}

impl Default for AnalysisProgress {
    fn default() -> Self {
        Self::idle()
    }
}

/// Callers see keyword extraction as part of text analysis.
pub fn session_stage(stage: AnalysisStage) -> AnalysisStage {
    match stage {
        AnalysisStage::AnalyzingKeywords => AnalysisStage::AnalyzingText,
        other => other,
    }
}

/// Stderr progress line for interactive runs.
pub struct DefaultProgressReporter {
    /// Whether to show output (disabled in quiet mode)
    show_output: bool,
    /// Whether the header line has been printed
    started: Cell<bool>,
}

impl DefaultProgressReporter {
    pub fn new() -> Self {
        Self {
            show_output: true,
            started: Cell::new(false),
        }
    }

    /// Create a reporter with output disabled.
    pub fn quiet() -> Self {
        Self {
            show_output: false,
            ..Self::new()
        }
    }

    /// Print the header once.
    pub fn start(&self, post_count: usize, mode: &str) {
        if !self.show_output || self.started.replace(true) {
            return;
        }

        eprintln!(
            "Analyzing archive... ({} post{}, {} mode)",
            post_count,
            if post_count == 1 { "" } else { "s" },
            mode
        );
    }

    /// Redraw the progress line.
    pub fn update(&self, progress: &AnalysisProgress) {
        if self.show_output {
            eprint!("\r  [{}] {}", format_percent(progress.progress), progress.message);
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line and print a summary.
    pub fn finish(&self, summary: &str) {
        if self.show_output {
            eprint!("\r                                                    \r");
            eprintln!("{}", summary);
        }
    }
}

impl Default for DefaultProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Right-aligned percentage, e.g. ` 40%`.
fn format_percent(progress: u8) -> String {
    format!("{:>3}%", progress.min(100))
}
