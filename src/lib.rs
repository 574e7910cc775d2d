//! Threads year-in-review analysis.
//!
//! Turns a parsed archive bundle into a [`RecapResult`]: text statistics,
//! keywords, time trends, social counts, and fun facts for one review year.
//! The pipeline can run inline or on a background worker that streams
//! progress back to the caller.

pub mod analyzer;
pub mod bundle;
pub mod cli;
pub mod config;
pub mod worker;

pub use analyzer::{run_analysis_pipeline, AnalysisError, AnalysisYearWindow, RecapResult};
pub use bundle::ParsedBundle;
pub use config::Config;
pub use worker::{AnalysisSession, AnalysisWorker};
