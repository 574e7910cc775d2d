//! Analysis session: one caller-facing object that runs the pipeline either
//! on a background worker or inline, and keeps the observable state
//! (running flag, progress, result, error) up to date.
//!
//! A session owns at most one worker. Starting a new run terminates the
//! previous worker first; there is no queueing. The worker is torn down when
//! a run finishes, on [`AnalysisSession::reset`], and when the session is
//! dropped.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::analyzer::error::{panic_message, AnalysisError};
use crate::analyzer::pipeline::{AnalysisStage, PipelineOptions};
use crate::analyzer::progress::AnalysisProgress;
use crate::analyzer::result::RecapResult;
use crate::bundle::ParsedBundle;

use super::handle::{pipeline_analyzer, AnalysisWorker, SharedAnalyzer};
use super::protocol::{WorkerRequest, WorkerResponse};

/// Observer called on every progress change.
pub type ProgressListener = Box<dyn FnMut(&AnalysisProgress)>;

/// Caller-side analysis state machine.
pub struct AnalysisSession {
    analyzer: SharedAnalyzer,
    worker: Option<AnalysisWorker>,
    listener: Option<ProgressListener>,
    is_analyzing: bool,
    progress: AnalysisProgress,
    result: Option<RecapResult>,
    error: Option<String>,
}

impl AnalysisSession {
    /// Session running the standard pipeline with `options`.
    pub fn new(options: PipelineOptions) -> Self {
        Self::with_analyzer(pipeline_analyzer(options))
    }

    /// Session running a custom analyzer on both paths.
    pub fn with_analyzer(analyzer: SharedAnalyzer) -> Self {
        Self {
            analyzer,
            worker: None,
            listener: None,
            is_analyzing: false,
            progress: AnalysisProgress::idle(),
            result: None,
            error: None,
        }
    }

    /// Register a progress observer (replaces any previous one).
    pub fn on_progress<F>(&mut self, listener: F)
    where
        F: FnMut(&AnalysisProgress) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn is_analyzing(&self) -> bool {
        self.is_analyzing
    }

    pub fn progress(&self) -> &AnalysisProgress {
        &self.progress
    }

    pub fn result(&self) -> Option<&RecapResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a worker is currently attached.
    pub fn has_worker(&self) -> bool {
        self.worker.is_some()
    }

    /// Start a worker run without waiting for it.
    ///
    /// Any worker already attached is terminated first and its run discarded.
    pub fn start(&mut self, bundle: ParsedBundle) -> Result<(), AnalysisError> {
        self.begin();

        if let Some(mut previous) = self.worker.take() {
            tracing::warn!("terminating in-flight analysis to start a new one");
            previous.terminate();
        }

        let worker = match AnalysisWorker::spawn_with(self.analyzer.clone()) {
            Ok(worker) => worker,
            Err(e) => return Err(self.fail(e)),
        };
        if let Err(e) = worker.post(WorkerRequest::analyze(bundle)) {
            return Err(self.fail(e));
        }

        tracing::info!("analysis started on worker");
        self.worker = Some(worker);
        Ok(())
    }

    /// Block until the running worker produces a terminal message.
    pub fn wait(&mut self) -> Result<RecapResult, AnalysisError> {
        loop {
            let response = match self.worker.as_ref() {
                Some(worker) => worker.recv(),
                None => Err(AnalysisError::Cancelled),
            };
            match response {
                Ok(response) => {
                    if let Some(outcome) = self.handle(response) {
                        return outcome;
                    }
                }
                Err(e) => return Err(self.fail(e)),
            }
        }
    }

    /// Like [`wait`](Self::wait), but terminates the worker once `timeout`
    /// has elapsed without a terminal message. A timeout too large to
    /// represent as a deadline waits without one.
    pub fn wait_timeout(&mut self, timeout: Duration) -> Result<RecapResult, AnalysisError> {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return self.wait();
        };

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let response = match self.worker.as_ref() {
                Some(worker) => worker.recv_timeout(remaining),
                None => Err(AnalysisError::Cancelled),
            };
            match response {
                Ok(Some(response)) => {
                    if let Some(outcome) = self.handle(response) {
                        return outcome;
                    }
                }
                Ok(None) => {
                    let secs = AnalysisError::timeout_secs(timeout);
                    tracing::warn!(secs, "analysis timed out");
                    return Err(self.fail(AnalysisError::TimedOut { secs }));
                }
                Err(e) => return Err(self.fail(e)),
            }
        }
    }

    /// Apply every message already waiting, without blocking.
    ///
    /// Returns `Some` once the run has ended.
    pub fn poll(&mut self) -> Option<Result<RecapResult, AnalysisError>> {
        loop {
            let response = self.worker.as_ref()?.try_recv();
            match response {
                Ok(Some(response)) => {
                    if let Some(outcome) = self.handle(response) {
                        return Some(outcome);
                    }
                }
                Ok(None) => return None,
                Err(e) => return Some(Err(self.fail(e))),
            }
        }
    }

    /// Run on a background worker and wait for the result.
    pub fn analyze(&mut self, bundle: ParsedBundle) -> Result<RecapResult, AnalysisError> {
        self.start(bundle)?;
        self.wait()
    }

    /// Run on a background worker, giving up after `timeout`.
    pub fn analyze_with_timeout(
        &mut self,
        bundle: ParsedBundle,
        timeout: Duration,
    ) -> Result<RecapResult, AnalysisError> {
        self.start(bundle)?;
        self.wait_timeout(timeout)
    }

    /// Run inline on the caller's thread. Progress is reported before this
    /// returns, in the same order as the worker path.
    pub fn analyze_sync(&mut self, bundle: &ParsedBundle) -> Result<RecapResult, AnalysisError> {
        self.begin();
        if let Some(mut previous) = self.worker.take() {
            previous.terminate();
        }

        let analyzer = self.analyzer.clone();
        let progress = &mut self.progress;
        let listener = &mut self.listener;
        let mut on_progress = |stage: AnalysisStage, value: u8, message: &str| {
            *progress = AnalysisProgress::from_report(stage, value, message);
            if let Some(listener) = listener.as_mut() {
                listener(&*progress);
            }
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| analyzer(bundle, &mut on_progress)));

        match outcome {
            Ok(result) => Ok(self.complete(result)),
            Err(payload) => Err(self.fail(AnalysisError::Failed(panic_message(payload.as_ref())))),
        }
    }

    /// Cancel any run and return to the idle state.
    pub fn reset(&mut self) {
        if self.worker.is_some() {
            tracing::warn!("analysis reset while a run was in flight");
        }
        self.terminate_worker();
        self.is_analyzing = false;
        self.progress = AnalysisProgress::idle();
        self.result = None;
        self.error = None;
    }

    fn begin(&mut self) {
        self.is_analyzing = true;
        self.error = None;
        self.result = None;
        self.set_progress(AnalysisProgress::preparing());
    }

    /// Apply one worker message; `Some` when it ended the run.
    fn handle(&mut self, response: WorkerResponse) -> Option<Result<RecapResult, AnalysisError>> {
        match response {
            WorkerResponse::Progress {
                stage,
                progress,
                message,
            } => {
                self.set_progress(AnalysisProgress::from_report(stage, progress, &message));
                None
            }
            WorkerResponse::Result { data } => Some(Ok(self.complete(*data))),
            WorkerResponse::Error { error } => {
                Some(Err(self.fail(AnalysisError::WorkerFailed(error))))
            }
        }
    }

    fn set_progress(&mut self, progress: AnalysisProgress) {
        self.progress = progress;
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.progress);
        }
    }

    fn complete(&mut self, result: RecapResult) -> RecapResult {
        self.terminate_worker();
        self.is_analyzing = false;
        self.result = Some(result.clone());
        tracing::info!("analysis complete");
        result
    }

    fn fail(&mut self, error: AnalysisError) -> AnalysisError {
        self.terminate_worker();
        self.is_analyzing = false;
        self.error = Some(error.user_message());
        tracing::info!(error = %error, "analysis failed");
        error
    }

    fn terminate_worker(&mut self) {
        if let Some(mut worker) = self.worker.take() {
            worker.terminate();
        }
    }
}

impl Drop for AnalysisSession {
    fn drop(&mut self) {
        self.terminate_worker();
    }
}
