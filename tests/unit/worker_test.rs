//! Unit tests for the worker protocol and thread

use recap::analyzer::{AnalysisStage, PipelineOptions};
use recap::worker::{AnalysisWorker, WorkerRequest, WorkerResponse, UNKNOWN_MESSAGE_TYPE};
use recap::{run_analysis_pipeline, AnalysisError};

use crate::helpers::sample_bundle;

fn collect_run(worker: &AnalysisWorker) -> Vec<WorkerResponse> {
    let mut responses = Vec::new();
    loop {
        let response = worker.recv().unwrap();
        let done = response.is_terminal();
        responses.push(response);
        if done {
            return responses;
        }
    }
}

#[test]
fn worker_result_matches_inline_pipeline() {
    let bundle = sample_bundle();
    let worker = AnalysisWorker::spawn(PipelineOptions::default()).unwrap();
    worker.post(WorkerRequest::analyze(bundle.clone())).unwrap();

    let responses = collect_run(&worker);
    assert_eq!(
        responses.last(),
        Some(&WorkerResponse::result(run_analysis_pipeline(&bundle, None)))
    );
}

#[test]
fn worker_progress_is_strictly_increasing_and_ends_at_complete() {
    let worker = AnalysisWorker::spawn(PipelineOptions::default()).unwrap();
    worker.post(WorkerRequest::analyze(sample_bundle())).unwrap();

    let progress: Vec<(AnalysisStage, u8)> = collect_run(&worker)
        .into_iter()
        .filter_map(|r| match r {
            WorkerResponse::Progress {
                stage, progress, ..
            } => Some((stage, progress)),
            _ => None,
        })
        .collect();

    assert_eq!(progress.len(), 6);
    assert!(progress.windows(2).all(|w| w[0].1 < w[1].1));
    assert_eq!(progress.last(), Some(&(AnalysisStage::Complete, 100)));
}

#[test]
fn request_round_trips_through_json() {
    let request = WorkerRequest::analyze(sample_bundle());
    let decoded = WorkerRequest::decode(&request.encode().unwrap()).unwrap();
    assert_eq!(decoded, request);
}

#[test]
fn unknown_request_type_names_the_problem() {
    let err = WorkerRequest::decode(r#"{"type":"cancel"}"#).unwrap_err();
    assert_eq!(err, AnalysisError::Protocol(UNKNOWN_MESSAGE_TYPE.to_string()));
}

#[test]
fn dropped_worker_does_not_block() {
    let worker = AnalysisWorker::spawn(PipelineOptions::default()).unwrap();
    worker.post(WorkerRequest::analyze(sample_bundle())).unwrap();
    drop(worker);
}
