//! Year-in-review analysis over a parsed archive bundle.
//!
//! Five pure analyzers (text, keywords, time, social, fun facts) sequenced by
//! [`run_analysis_pipeline`]. None of them touch files, the network, or shared
//! state; missing data degrades to zeroes and empty lists.
//!
//! # Module Structure
//!
//! - [`window`] - the review-year window every analyzer filters by
//! - [`segment`] - word segmentation tiers for CJK / Latin text
//! - [`helpers`] - word/character counting, mention extraction, tallying
//! - [`pipeline`] - stage schedule and the orchestrating function
//! - [`result`] - output types

pub mod constants;
pub mod error;
pub mod fun_facts;
pub mod helpers;
pub mod keywords;
pub mod pipeline;
pub mod progress;
pub mod result;
pub mod segment;
pub mod social;
pub mod text;
pub mod time;
pub mod window;

pub use error::AnalysisError;
pub use pipeline::{
    run_analysis_pipeline, run_analysis_pipeline_with, AnalysisStage, PipelineOptions,
    ProgressCallback, PROGRESS_SCHEDULE,
};
pub use progress::{AnalysisProgress, DefaultProgressReporter};
pub use result::{
    FollowerGrowth, FunFacts, HeatmapCell, HolidayBadge, KeywordCount, MentionCount,
    MonthlyStats, RecapResult, SocialResult, TextResult, TimeResult,
};
pub use segment::{RegexSegmenter, Segment, Segmenter, SegmenterKind, UnicodeSegmenter};
pub use window::AnalysisYearWindow;
