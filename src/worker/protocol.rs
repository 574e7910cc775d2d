//! Worker wire protocol.
//!
//! One request shape and three response shapes, tagged by a `type` field:
//!
//! ```json
//! {"type": "analyze", "data": { ...bundle... }}
//! {"type": "progress", "stage": "analyzing-text", "progress": 20, "message": "..."}
//! {"type": "result", "data": { ...recap... }}
//! {"type": "error", "error": "..."}
//! ```
//!
//! Progress messages arrive in pipeline order, followed by exactly one
//! `result` or `error`.

use serde::{Deserialize, Serialize};

use crate::analyzer::error::AnalysisError;
use crate::analyzer::pipeline::AnalysisStage;
use crate::analyzer::result::RecapResult;
use crate::bundle::ParsedBundle;

/// Error text for a request whose `type` the worker does not handle.
pub const UNKNOWN_MESSAGE_TYPE: &str = "Unknown message type";

/// Caller -> worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkerRequest {
    Analyze { data: ParsedBundle },
}

/// Worker -> caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkerResponse {
    Progress {
        stage: AnalysisStage,
        progress: u8,
        message: String,
    },
    Result {
        data: Box<RecapResult>,
    },
    Error {
        error: String,
    },
}

impl WorkerRequest {
    pub fn analyze(data: ParsedBundle) -> Self {
        WorkerRequest::Analyze { data }
    }

    /// Decode one request, separating "not an analyze request" from
    /// "not a message at all".
    pub fn decode(json: &str) -> Result<Self, AnalysisError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| AnalysisError::Protocol(e.to_string()))?;

        match value.get("type").and_then(serde_json::Value::as_str) {
            Some("analyze") => serde_json::from_value(value)
                .map_err(|e| AnalysisError::Protocol(e.to_string())),
            Some(_) => Err(AnalysisError::Protocol(UNKNOWN_MESSAGE_TYPE.to_string())),
            None => Err(AnalysisError::Protocol("missing message type".to_string())),
        }
    }

    pub fn encode(&self) -> Result<String, AnalysisError> {
        serde_json::to_string(self).map_err(|e| AnalysisError::Protocol(e.to_string()))
    }
}

impl WorkerResponse {
    pub fn progress(stage: AnalysisStage, progress: u8, message: &str) -> Self {
        WorkerResponse::Progress {
            stage,
            progress,
            message: message.to_string(),
        }
    }

    pub fn result(data: RecapResult) -> Self {
        WorkerResponse::Result {
            data: Box::new(data),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        WorkerResponse::Error {
            error: error.into(),
        }
    }

    /// `result` and `error` end a run; `progress` does not.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WorkerResponse::Progress { .. })
    }

    pub fn encode(&self) -> Result<String, AnalysisError> {
        serde_json::to_string(self).map_err(|e| AnalysisError::Protocol(e.to_string()))
    }
}
