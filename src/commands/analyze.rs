//! Analyze command handler
//!
//! 1. Load config and apply CLI overrides
//! 2. Read the bundle JSON
//! 3. Run the pipeline on a worker (or inline with --sync)
//! 4. Print the recap JSON on stdout

use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};

use recap::analyzer::DefaultProgressReporter;
use recap::cli::AnalyzeArgs;
use recap::config::RunMode;
use recap::worker::AnalysisSession;
use recap::{Config, RecapResult};

use super::load_bundle;

/// Analyze a bundle file and print the recap.
pub fn handle(args: &AnalyzeArgs) -> Result<()> {
    let mut config = Config::load()?;
    apply_overrides(&mut config, args);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid options: {}", e))?;

    let bundle = load_bundle(Path::new(&args.file))?;
    let options = config.pipeline_options()?;

    let reporter = Rc::new(if config.output.quiet {
        DefaultProgressReporter::quiet()
    } else {
        DefaultProgressReporter::new()
    });
    reporter.start(bundle.posts.len(), config.analysis.mode.as_str());

    let mut session = AnalysisSession::new(options);
    let listener = Rc::clone(&reporter);
    session.on_progress(move |progress| listener.update(progress));

    let outcome = match (config.analysis.mode, config.timeout()) {
        (RunMode::Sync, _) => session.analyze_sync(&bundle),
        (RunMode::Worker, Some(timeout)) => session.analyze_with_timeout(bundle, timeout),
        (RunMode::Worker, None) => session.analyze(bundle),
    };
    let result = outcome.context("Analysis failed")?;

    reporter.finish(&summary(&result, options.window.year));
    println!("{}", render(&result, config.output.pretty)?);
    Ok(())
}

/// Fold command-line flags over the loaded config.
pub fn apply_overrides(config: &mut Config, args: &AnalyzeArgs) {
    if let Some(year) = args.year {
        config.analysis.year = year;
    }
    if let Some(segmenter) = args.segmenter {
        config.analysis.segmenter = segmenter;
    }
    if let Some(timeout) = args.timeout {
        config.analysis.timeout_secs = timeout;
    }
    if args.sync {
        config.analysis.mode = RunMode::Sync;
    }
    if args.compact {
        config.output.pretty = false;
    }
    if args.quiet {
        config.output.quiet = true;
    }
}

fn render(result: &RecapResult, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };
    json.context("Failed to serialize recap")
}

fn summary(result: &RecapResult, year: i32) -> String {
    format!(
        "Recap ready: {} post{} in {}, {} words written.",
        result.time.posts_in_year,
        if result.time.posts_in_year == 1 { "" } else { "s" },
        year,
        result.text.total_word_count
    )
}
