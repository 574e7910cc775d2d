//! Worker command handler

use std::io;

use anyhow::{Context, Result};

use recap::worker::stdio;
use recap::Config;

/// Serve JSON-lines analysis requests until stdin closes.
pub fn handle(year: Option<i32>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(year) = year {
        config.analysis.year = year;
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid options: {}", e))?;
    let options = config.pipeline_options()?;

    tracing::info!(year = options.window.year, "serving analysis requests on stdio");
    let stdin = io::stdin();
    stdio::serve(stdin.lock(), io::stdout().lock(), options).context("Worker I/O failed")
}
