//! Running the analysis off the caller's thread.
//!
//! - [`protocol`] - request/response messages
//! - [`handle`] - one background worker thread and its channels
//! - [`session`] - caller-side state machine with worker and sync paths
//! - [`stdio`] - JSON-lines front end used by `recap worker`

pub mod handle;
pub mod protocol;
pub mod session;
pub mod stdio;

pub use handle::{pipeline_analyzer, AnalysisWorker, SharedAnalyzer};
pub use protocol::{WorkerRequest, WorkerResponse, UNKNOWN_MESSAGE_TYPE};
pub use session::AnalysisSession;
