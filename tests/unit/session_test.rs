//! Unit tests for the analysis session

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use recap::analyzer::{AnalysisProgress, AnalysisStage, PipelineOptions};
use recap::bundle::ParsedBundle;
use recap::worker::SharedAnalyzer;
use recap::{run_analysis_pipeline, AnalysisError, AnalysisSession, RecapResult};

use crate::helpers::sample_bundle;

fn slow_analyzer(delay: Duration) -> SharedAnalyzer {
    Arc::new(
        move |bundle: &ParsedBundle, on_progress: &mut dyn FnMut(AnalysisStage, u8, &str)| {
            on_progress(AnalysisStage::AnalyzingText, 20, "slow");
            thread::sleep(delay);
            run_analysis_pipeline(bundle, None)
        },
    )
}

#[test]
fn worker_and_sync_paths_agree() {
    let bundle = sample_bundle();
    let mut worker_session = AnalysisSession::new(PipelineOptions::default());
    let mut sync_session = AnalysisSession::new(PipelineOptions::default());

    let from_worker = worker_session.analyze(bundle.clone()).unwrap();
    let from_sync = sync_session.analyze_sync(&bundle).unwrap();
    assert_eq!(from_worker, from_sync);
}

#[test]
fn progress_observer_sees_preparing_then_schedule() {
    let seen: Rc<RefCell<Vec<AnalysisProgress>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let mut session = AnalysisSession::new(PipelineOptions::default());
    session.on_progress(move |p| sink.borrow_mut().push(p.clone()));

    session.analyze(sample_bundle()).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen[0], AnalysisProgress::preparing());
    assert_eq!(seen.len(), 7);
    assert!(seen
        .iter()
        .all(|p| p.stage != AnalysisStage::AnalyzingKeywords));
    assert_eq!(seen[6].progress, 100);
    assert_eq!(seen[6].message, "Analysis complete!");
}

#[test]
fn timeout_terminates_and_reports() {
    let mut session = AnalysisSession::with_analyzer(slow_analyzer(Duration::from_secs(5)));
    let err = session
        .analyze_with_timeout(sample_bundle(), Duration::from_millis(50))
        .unwrap_err();

    assert_eq!(err, AnalysisError::TimedOut { secs: 1 });
    assert_eq!(
        session.error(),
        Some("Analysis timed out after 1 seconds")
    );
    assert!(!session.is_analyzing());
    assert!(!session.has_worker());
    assert!(session.result().is_none());
}

#[test]
fn restart_discards_previous_run() {
    let mut session = AnalysisSession::with_analyzer(slow_analyzer(Duration::from_millis(200)));
    session.start(ParsedBundle::default()).unwrap();
    session.start(sample_bundle()).unwrap();

    let result = session.wait().unwrap();
    assert_eq!(result, run_analysis_pipeline(&sample_bundle(), None));
}

#[test]
fn poll_eventually_yields_result() {
    let mut session = AnalysisSession::new(PipelineOptions::default());
    session.start(sample_bundle()).unwrap();
    assert!(session.is_analyzing());

    let mut outcome = None;
    for _ in 0..500 {
        if let Some(done) = session.poll() {
            outcome = Some(done);
            break;
        }
        thread::sleep(Duration::from_millis(10));
    }

    let result: RecapResult = outcome.expect("run finished").unwrap();
    assert_eq!(session.result(), Some(&result));
    assert!(!session.is_analyzing());
}

#[test]
fn reset_mid_run_returns_to_idle() {
    let mut session = AnalysisSession::with_analyzer(slow_analyzer(Duration::from_millis(200)));
    session.start(sample_bundle()).unwrap();
    session.reset();

    assert!(!session.is_analyzing());
    assert!(!session.has_worker());
    assert_eq!(session.progress(), &AnalysisProgress::idle());
    assert_eq!(session.wait(), Err(AnalysisError::Cancelled));
}

#[test]
fn sync_failure_sets_error_once() {
    let failing: SharedAnalyzer = Arc::new(
        |_: &ParsedBundle, _: &mut dyn FnMut(AnalysisStage, u8, &str)| -> RecapResult {
            panic!("archive unreadable")
        },
    );
    let mut session = AnalysisSession::with_analyzer(failing);
    let err = session.analyze_sync(&ParsedBundle::default()).unwrap_err();

    assert_eq!(err.user_message(), "archive unreadable");
    assert_eq!(session.error(), Some("archive unreadable"));
    assert!(session.result().is_none());
}
