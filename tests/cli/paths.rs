use crate::support::{fixture_json, fixture_yaml, stdout_json, Workspace};
use predicates::prelude::*;

// ============================================================================
// paths command tests
// ============================================================================

#[test]
fn test_paths_directed_human() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    ws.cmd()
        .arg("paths")
        .arg(&graph)
        .args(["1", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 paths from 1 to 8:"))
        .stdout(predicate::str::contains("1 -> 2 -> 3 -> 8"))
        .stdout(predicate::str::contains("1 -> 2 -> 4 -> 8"))
        .stdout(predicate::str::contains("1 -> 2 -> 7 -> 8"))
        .stdout(predicate::str::contains("1 -> 9 -> 8").not());
}

#[test]
fn test_paths_undirected_json() {
    let ws = Workspace::new();
    let graph = ws.fixture(false);

    let output = ws
        .cmd()
        .args(["--format", "json", "paths"])
        .arg(&graph)
        .args(["1", "8"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["directed"], false);
    assert_eq!(json["count"], 4);
    // Shortest paths are listed first
    assert_eq!(json["paths"][0], serde_json::json!(["1", "9", "8"]));
}

#[test]
fn test_paths_undirected_flag_overrides_file() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    ws.cmd()
        .args(["--undirected", "paths"])
        .arg(&graph)
        .args(["1", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 paths from 1 to 8:"))
        .stdout(predicate::str::contains("1 -> 9 -> 8"));
}

#[test]
fn test_paths_records() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    ws.cmd()
        .args(["--format", "records", "paths"])
        .arg(&graph)
        .args(["1", "8"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H graphpaths=1 records=1 mode=paths from=1 to=8 found=true paths=3\n",
        ))
        .stdout(predicate::str::contains("P 1 1 -> 2 -> 3 -> 8\n"))
        .stdout(predicate::str::contains("P 3 1 -> 2 -> 7 -> 8\n"));
}

#[test]
fn test_paths_no_path_is_success() {
    let ws = Workspace::new();
    let graph = ws.write(
        "split.toml",
        "nodes = [\"c\"]\n\n[[edges]]\nfrom = \"a\"\nto = \"b\"\n",
    );

    ws.cmd()
        .arg("paths")
        .arg(&graph)
        .args(["a", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from a to c"));

    let output = ws
        .cmd()
        .args(["--format", "json", "paths"])
        .arg(&graph)
        .args(["b", "a"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert_eq!(json["paths"], serde_json::json!([]));
}

#[test]
fn test_paths_missing_node_exit_code_3() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    ws.cmd()
        .arg("paths")
        .arg(&graph)
        .args(["1", "42"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: 42"));
}

#[test]
fn test_paths_same_result_for_every_file_format() {
    let ws = Workspace::new();
    let toml = ws.fixture(false);
    let json = ws.write("graph.json", &fixture_json(false));
    let yaml = ws.write("graph.yml", &fixture_yaml(false));

    let run = |file: &std::path::Path| {
        ws.cmd()
            .args(["--format", "records", "paths"])
            .arg(file)
            .args(["1", "8"])
            .output()
            .unwrap()
            .stdout
    };

    let expected = run(&toml);
    assert_eq!(run(&json), expected);
    assert_eq!(run(&yaml), expected);
}
