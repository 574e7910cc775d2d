//! `recap worker` JSON-lines tests

use assert_cmd::Command;
use tempfile::TempDir;

#[allow(deprecated)]
fn run_worker(home: &std::path::Path, input: impl Into<Vec<u8>>) -> Vec<serde_json::Value> {
    let output = Command::cargo_bin("recap")
        .unwrap()
        .env("HOME", home)
        .arg("worker")
        .write_stdin(input.into())
        .output()
        .unwrap();
    assert!(output.status.success());

    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn analyze_request_streams_progress_then_result() {
    let temp = TempDir::new().unwrap();
    let lines = run_worker(
        temp.path(),
        "{\"type\":\"analyze\",\"data\":{\"posts\":[{\"title\":\"hi @bob\",\"creation_timestamp\":1749988800}]}}\n",
    );

    assert_eq!(lines.len(), 7);
    let stages: Vec<&str> = lines[..6]
        .iter()
        .map(|l| l["stage"].as_str().unwrap())
        .collect();
    assert_eq!(
        stages,
        vec![
            "analyzing-text",
            "analyzing-keywords",
            "analyzing-time",
            "analyzing-social",
            "complete",
            "complete"
        ]
    );
    assert_eq!(lines[6]["type"], "result");
    assert_eq!(lines[6]["data"]["text"]["topMentions"][0]["username"], "bob");
}

#[test]
fn unknown_type_gets_error_and_worker_keeps_serving() {
    let temp = TempDir::new().unwrap();
    let lines = run_worker(
        temp.path(),
        "{\"type\":\"status\"}\n{\"type\":\"analyze\",\"data\":{}}\n",
    );

    assert_eq!(lines[0], serde_json::json!({"type": "error", "error": "Unknown message type"}));
    assert_eq!(lines.last().unwrap()["type"], "result");
}

#[test]
fn non_utf8_line_gets_error_and_worker_keeps_serving() {
    let temp = TempDir::new().unwrap();
    let lines = run_worker(
        temp.path(),
        b"\xff\xfe\n{\"type\":\"analyze\",\"data\":{}}\n".to_vec(),
    );

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0]["type"], "error");
    assert_eq!(lines[7]["type"], "result");
}
