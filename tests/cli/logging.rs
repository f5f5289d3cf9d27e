use crate::support::Workspace;
use predicates::prelude::*;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_log_level_debug_emits_events() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    ws.cmd()
        .args(["--log-level", "debug", "info"])
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("load_graph"));
}

#[test]
fn test_default_level_is_quiet() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    ws.cmd()
        .arg("info")
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_verbose_enables_debug() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    ws.cmd()
        .args(["--verbose", "shortest"])
        .arg(&graph)
        .args(["1", "8"])
        .assert()
        .success()
        .stderr(predicate::str::contains("traversal_metrics"));
}

#[test]
fn test_log_level_from_env() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    ws.cmd()
        .env("GRAPHPATHS_LOG_LEVEL", "debug")
        .arg("info")
        .arg(&graph)
        .assert()
        .success()
        .stderr(predicate::str::contains("resolve_config"));
}

#[test]
fn test_log_json_lines() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    let output = ws
        .cmd()
        .args(["--log-level", "debug", "--log-json", "info"])
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut lines = stderr.lines().filter(|l| !l.trim().is_empty()).peekable();
    assert!(lines.peek().is_some(), "expected log output");
    for line in lines {
        let event: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("not JSON: {} ({})", line, e));
        assert!(event.get("level").is_some());
    }
}

#[test]
fn test_logs_stay_off_stdout() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    let output = ws
        .cmd()
        .args(["--log-level", "debug", "--format", "json", "info"])
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"], 9);
}
