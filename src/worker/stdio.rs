//! Line-delimited JSON front end for the worker.
//!
//! Each input line is one [`WorkerRequest`]; each output line is one
//! [`WorkerResponse`]. Bad lines are answered with an `error` message and the
//! loop keeps going, so a single malformed request never ends the process.

use std::io::{self, BufRead, Write};

use crate::analyzer::error::AnalysisError;
use crate::analyzer::pipeline::PipelineOptions;

use super::handle::AnalysisWorker;
use super::protocol::{WorkerRequest, WorkerResponse};

/// Serve requests from `reader` until end of input.
pub fn serve<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    options: PipelineOptions,
) -> io::Result<()> {
    let worker = match AnalysisWorker::spawn(options) {
        Ok(worker) => worker,
        Err(e) => return Err(report_startup_failure(&mut writer, e)),
    };

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                tracing::debug!(error = %e, "rejected non-UTF-8 worker request");
                write_response(
                    &mut writer,
                    &WorkerResponse::error(format!("Request is not valid UTF-8: {}", e)),
                )?;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        match WorkerRequest::decode(line) {
            Ok(request) => forward_run(&worker, request, &mut writer)?,
            Err(e) => {
                tracing::debug!(error = %e, "rejected worker request");
                let message = match e {
                    AnalysisError::Protocol(detail) => detail,
                    other => other.user_message(),
                };
                write_response(&mut writer, &WorkerResponse::error(message))?;
            }
        }
    }
}

/// Post one request and copy its responses out until the terminal one.
fn forward_run<W: Write>(
    worker: &AnalysisWorker,
    request: WorkerRequest,
    writer: &mut W,
) -> io::Result<()> {
    worker.post(request).map_err(to_io)?;
    loop {
        let response = worker.recv().map_err(to_io)?;
        let terminal = response.is_terminal();
        write_response(writer, &response)?;
        if terminal {
            return Ok(());
        }
    }
}

/// Tell the client the worker never came up, then hand back the error.
fn report_startup_failure<W: Write>(writer: &mut W, error: AnalysisError) -> io::Error {
    tracing::error!(error = %error, "analysis worker failed to start");
    if let Err(e) = write_response(writer, &WorkerResponse::error(error.user_message())) {
        return e;
    }
    to_io(error)
}

fn write_response<W: Write>(writer: &mut W, response: &WorkerResponse) -> io::Result<()> {
    let line = response.encode().map_err(to_io)?;
    writeln!(writer, "{}", line)?;
    writer.flush()
}

fn to_io(e: AnalysisError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.user_message())
}
