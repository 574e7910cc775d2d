//! Background analysis worker.
//!
//! One dedicated thread serves [`WorkerRequest`]s from a channel and answers
//! on a second channel with [`WorkerResponse`]s. Terminating the worker drops
//! both channel ends: the caller observes nothing further, and the thread
//! abandons whatever it was computing once its next send fails.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::analyzer::error::{panic_message, AnalysisError};
use crate::analyzer::pipeline::{run_analysis_pipeline_with, AnalysisStage, PipelineOptions};
use crate::analyzer::result::RecapResult;
use crate::bundle::ParsedBundle;

use super::protocol::{WorkerRequest, WorkerResponse};

/// Name given to worker threads.
pub const WORKER_THREAD_NAME: &str = "recap-analyzer";

/// A thread-safe, shared analysis function.
pub type SharedAnalyzer = Arc<
    dyn Fn(&ParsedBundle, &mut dyn FnMut(AnalysisStage, u8, &str)) -> RecapResult + Send + Sync,
>;

/// The standard analyzer: the pipeline with `options`.
pub fn pipeline_analyzer(options: PipelineOptions) -> SharedAnalyzer {
    Arc::new(
        move |bundle: &ParsedBundle, on_progress: &mut dyn FnMut(AnalysisStage, u8, &str)| {
            run_analysis_pipeline_with(bundle, &options, Some(on_progress))
        },
    )
}

/// Handle to one background worker thread.
pub struct AnalysisWorker {
    request_tx: Option<Sender<WorkerRequest>>,
    response_rx: Option<Receiver<WorkerResponse>>,
    cancelled: Arc<AtomicBool>,
}

impl AnalysisWorker {
    /// Start a worker running the standard pipeline.
    pub fn spawn(options: PipelineOptions) -> Result<Self, AnalysisError> {
        Self::spawn_with(pipeline_analyzer(options))
    }

    /// Start a worker running `analyzer`.
    pub fn spawn_with(analyzer: SharedAnalyzer) -> Result<Self, AnalysisError> {
        let (request_tx, request_rx) = mpsc::channel::<WorkerRequest>();
        let (response_tx, response_rx) = mpsc::channel::<WorkerResponse>();
        let cancelled = Arc::new(AtomicBool::new(false));

        // Detached; the thread exits once its request channel closes.
        let flag = Arc::clone(&cancelled);
        thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || serve_requests(request_rx, response_tx, analyzer, flag))
            .map_err(|e| AnalysisError::WorkerStartup(e.to_string()))?;

        tracing::debug!("analysis worker started");

        Ok(Self {
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            cancelled,
        })
    }

    /// Send a request to the worker.
    pub fn post(&self, request: WorkerRequest) -> Result<(), AnalysisError> {
        let tx = self.request_tx.as_ref().ok_or(AnalysisError::Cancelled)?;
        tx.send(request).map_err(|_| AnalysisError::Disconnected)
    }

    /// Block until the next response.
    pub fn recv(&self) -> Result<WorkerResponse, AnalysisError> {
        let rx = self.response_rx.as_ref().ok_or(AnalysisError::Cancelled)?;
        rx.recv().map_err(|_| AnalysisError::Disconnected)
    }

    /// Wait up to `timeout` for the next response; `Ok(None)` on expiry.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<WorkerResponse>, AnalysisError> {
        let rx = self.response_rx.as_ref().ok_or(AnalysisError::Cancelled)?;
        match rx.recv_timeout(timeout) {
            Ok(response) => Ok(Some(response)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(AnalysisError::Disconnected),
        }
    }

    /// Next response if one is already waiting.
    pub fn try_recv(&self) -> Result<Option<WorkerResponse>, AnalysisError> {
        self.recv_timeout(Duration::ZERO)
    }

    /// Tear the worker down. Idempotent.
    ///
    /// The thread is not joined: a run in progress finishes on its own and
    /// its output is discarded.
    pub fn terminate(&mut self) {
        if self.is_terminated() {
            return;
        }
        self.cancelled.store(true, Ordering::SeqCst);
        self.request_tx = None;
        self.response_rx = None;
        tracing::debug!("analysis worker terminated");
    }

    pub fn is_terminated(&self) -> bool {
        self.response_rx.is_none()
    }
}

impl Drop for AnalysisWorker {
    fn drop(&mut self) {
        self.terminate();
    }
}

/// Worker thread body: serve requests until the request channel closes.
fn serve_requests(
    requests: Receiver<WorkerRequest>,
    responses: Sender<WorkerResponse>,
    analyzer: SharedAnalyzer,
    cancelled: Arc<AtomicBool>,
) {
    for request in requests {
        let WorkerRequest::Analyze { data } = request;
        if !run_one(&data, &responses, &analyzer, &cancelled) {
            break;
        }
    }
}

/// Run one analysis. Returns `false` once the caller is gone.
fn run_one(
    data: &ParsedBundle,
    responses: &Sender<WorkerResponse>,
    analyzer: &SharedAnalyzer,
    cancelled: &AtomicBool,
) -> bool {
    let mut send_progress = |stage: AnalysisStage, progress: u8, message: &str| {
        if !cancelled.load(Ordering::SeqCst) {
            // A failed send means the caller terminated us; the run result is discarded below.
            let _ = responses.send(WorkerResponse::progress(stage, progress, message));
        }
    };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| analyzer(data, &mut send_progress)));

    if cancelled.load(Ordering::SeqCst) {
        return false;
    }

    let response = match outcome {
        Ok(result) => WorkerResponse::result(result),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::warn!(error = %message, "analysis panicked in worker");
            WorkerResponse::error(AnalysisError::WorkerFailed(message).user_message())
        }
    };

    responses.send(response).is_ok()
}
