//! The analysis pipeline: the single entry point shared by the worker and
//! synchronous execution paths.
//!
//! # Stages
//!
//! | Stage                | Progress | Work                                  |
//! |----------------------|----------|---------------------------------------|
//! | `analyzing-text`     | 20       | word/char counts, mentions            |
//! | `analyzing-keywords` | 40       | keyword ranking, merged into text     |
//! | `analyzing-time`     | 60       | monthly histogram, heatmap            |
//! | `analyzing-social`   | 80       | followers, following, likes, saved    |
//! | `complete`           | 95       | fun facts                             |
//! | `complete`           | 100      | done                                  |
//!
//! Every stage is a pure function of the bundle. The pipeline keeps no state
//! between runs, so calling it twice on the same bundle yields equal results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bundle::ParsedBundle;

use super::fun_facts::calculate_fun_facts;
use super::keywords::analyze_keywords;
use super::result::RecapResult;
use super::segment::SegmenterKind;
use super::social::{analyze_social, SocialInputs};
use super::text::analyze_text;
use super::time::analyze_time;
use super::window::AnalysisYearWindow;

/// Pipeline stage tags, as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisStage {
    Parsing,
    AnalyzingText,
    AnalyzingKeywords,
    AnalyzingTime,
    AnalyzingSocial,
    Complete,
}

impl AnalysisStage {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisStage::Parsing => "parsing",
            AnalysisStage::AnalyzingText => "analyzing-text",
            AnalysisStage::AnalyzingKeywords => "analyzing-keywords",
            AnalysisStage::AnalyzingTime => "analyzing-time",
            AnalysisStage::AnalyzingSocial => "analyzing-social",
            AnalysisStage::Complete => "complete",
        }
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the fixed progress schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub stage: AnalysisStage,
    pub progress: u8,
    pub message: &'static str,
}

pub const STEP_TEXT: ProgressStep = ProgressStep {
    stage: AnalysisStage::AnalyzingText,
    progress: 20,
    message: "Analyzing text content...",
};
pub const STEP_KEYWORDS: ProgressStep = ProgressStep {
    stage: AnalysisStage::AnalyzingKeywords,
    progress: 40,
    message: "Extracting keywords...",
};
pub const STEP_TIME: ProgressStep = ProgressStep {
    stage: AnalysisStage::AnalyzingTime,
    progress: 60,
    message: "Analyzing time trends...",
};
pub const STEP_SOCIAL: ProgressStep = ProgressStep {
    stage: AnalysisStage::AnalyzingSocial,
    progress: 80,
    message: "Tallying social stats...",
};
pub const STEP_FUN_FACTS: ProgressStep = ProgressStep {
    stage: AnalysisStage::Complete,
    progress: 95,
    message: "Generating fun facts...",
};
pub const STEP_DONE: ProgressStep = ProgressStep {
    stage: AnalysisStage::Complete,
    progress: 100,
    message: "Analysis complete!",
};

/// Every progress report a run emits, in order.
pub const PROGRESS_SCHEDULE: [ProgressStep; 6] = [
    STEP_TEXT,
    STEP_KEYWORDS,
    STEP_TIME,
    STEP_SOCIAL,
    STEP_FUN_FACTS,
    STEP_DONE,
];

/// Progress sink: `(stage, percent, message)`.
pub type ProgressCallback<'a> = dyn FnMut(AnalysisStage, u8, &str) + 'a;

/// Knobs that change what the analyzers see, not how they run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub window: AnalysisYearWindow,
    pub segmenter: SegmenterKind,
}

/// Run every analyzer over `bundle` with default options.
pub fn run_analysis_pipeline(
    bundle: &ParsedBundle,
    on_progress: Option<&mut ProgressCallback<'_>>,
) -> RecapResult {
    run_analysis_pipeline_with(bundle, &PipelineOptions::default(), on_progress)
}

/// Run every analyzer over `bundle`.
///
/// `on_progress`, when given, is invoked once per [`PROGRESS_SCHEDULE`] step
/// before that step's work starts.
pub fn run_analysis_pipeline_with(
    bundle: &ParsedBundle,
    options: &PipelineOptions,
    mut on_progress: Option<&mut ProgressCallback<'_>>,
) -> RecapResult {
    let window = &options.window;
    let mut report = |step: ProgressStep| {
        tracing::debug!(stage = %step.stage, progress = step.progress, "pipeline stage");
        if let Some(callback) = on_progress.as_mut() {
            callback(step.stage, step.progress, step.message);
        }
    };

    report(STEP_TEXT);
    let mut text = analyze_text(&bundle.posts, window);

    report(STEP_KEYWORDS);
    text.top_keywords = analyze_keywords(&bundle.posts, window, options.segmenter.segmenter());

    report(STEP_TIME);
    let time = analyze_time(&bundle.posts, window);

    report(STEP_SOCIAL);
    let social = analyze_social(
        SocialInputs {
            followers: &bundle.followers,
            following: &bundle.following,
            likes: &bundle.likes,
            saved_posts: &bundle.saved_posts,
        },
        window,
    );

    report(STEP_FUN_FACTS);
    let fun_facts = calculate_fun_facts(text.total_word_count, &bundle.posts, window);

    report(STEP_DONE);

    RecapResult {
        text,
        time,
        social,
        fun_facts,
    }
}
