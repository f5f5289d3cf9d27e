use crate::support::{stdout_json, Workspace};
use predicates::prelude::*;

// ============================================================================
// shortest command tests
// ============================================================================

#[test]
fn test_shortest_directed() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    ws.cmd()
        .arg("shortest")
        .arg(&graph)
        .args(["1", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2 -> 3 -> 8"))
        .stdout(predicate::str::contains("distance: 6"))
        .stdout(predicate::str::contains("hops: 3"));
}

#[test]
fn test_shortest_undirected_json() {
    let ws = Workspace::new();
    let graph = ws.fixture(false);

    let output = ws
        .cmd()
        .args(["--format", "json", "shortest"])
        .arg(&graph)
        .args(["1", "8"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["distance"], 5);
    assert_eq!(json["hops"], 2);
    assert_eq!(json["path"], serde_json::json!(["1", "9", "8"]));
}

#[test]
fn test_shortest_records() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    ws.cmd()
        .args(["--format", "records", "shortest"])
        .arg(&graph)
        .args(["1", "8"])
        .assert()
        .success()
        .stdout(
            "H graphpaths=1 records=1 mode=shortest from=1 to=8 found=true distance=6 hops=3\n\
             P 1 1 -> 2 -> 3 -> 8\n",
        );
}

#[test]
fn test_shortest_default_weight_from_config() {
    let ws = Workspace::new();
    ws.write_config("[graph]\ndefault_weight = 10\n");
    let graph = ws.write(
        "unweighted.toml",
        r#"
[[edges]]
from = "a"
to = "z"
weight = 25

[[edges]]
from = "a"
to = "b"

[[edges]]
from = "b"
to = "z"
"#,
    );

    ws.cmd()
        .arg("shortest")
        .arg(&graph)
        .args(["a", "z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a -> b -> z"))
        .stdout(predicate::str::contains("distance: 20"));
}

#[test]
fn test_shortest_unreachable_is_success() {
    let ws = Workspace::new();
    let graph = ws.write(
        "oneway.json",
        r#"{"directed": true, "edges": [{"from": "a", "to": "b"}]}"#,
    );

    let output = ws
        .cmd()
        .args(["--format", "json", "shortest"])
        .arg(&graph)
        .args(["b", "a"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert!(json["distance"].is_null());
}

#[test]
fn test_shortest_same_node() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    ws.cmd()
        .args(["--format", "records", "shortest"])
        .arg(&graph)
        .args(["4", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("found=true distance=0 hops=0"))
        .stdout(predicate::str::contains("P 1 4\n"));
}

#[test]
fn test_shortest_missing_node_json_envelope() {
    let ws = Workspace::new();
    let graph = ws.fixture(true);

    let output = ws
        .cmd()
        .args(["--format", "json", "shortest"])
        .arg(&graph)
        .args(["nope", "8"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["code"], 3);
    assert_eq!(err["error"]["type"], "node_not_found");
    assert_eq!(err["error"]["message"], "node not found: nope");
}
