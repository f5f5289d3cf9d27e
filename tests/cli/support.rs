use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The nine-node, fourteen-edge weighted graph used across the CLI tests
pub const FIXTURE_EDGES: [(&str, &str, u64); 14] = [
    ("1", "2", 1),
    ("2", "3", 3),
    ("2", "4", 5),
    ("2", "5", 3),
    ("2", "7", 4),
    ("3", "8", 2),
    ("4", "5", 2),
    ("4", "6", 3),
    ("4", "8", 6),
    ("5", "6", 1),
    ("6", "7", 5),
    ("7", "8", 3),
    ("8", "9", 2),
    ("9", "1", 3),
];

/// Temporary workspace holding graph files and an isolated config directory
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("config")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Write a file relative to the workspace root
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Write the fixture graph as TOML
    pub fn fixture(&self, directed: bool) -> PathBuf {
        let name = if directed {
            "directed.toml"
        } else {
            "undirected.toml"
        };
        self.write(name, &fixture_toml(directed))
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_dir().join("config.toml"), content).unwrap();
    }

    /// A graphpaths command isolated from the user's config
    pub fn cmd(&self) -> Command {
        let mut cmd = graphpaths();
        cmd.current_dir(self.path())
            .env("GRAPHPATHS_CONFIG_DIR", self.config_dir())
            .env_remove("GRAPHPATHS_LOG")
            .env_remove("GRAPHPATHS_LOG_LEVEL")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Get a Command for graphpaths
pub fn graphpaths() -> Command {
    cargo_bin_cmd!("graphpaths")
}

pub fn fixture_toml(directed: bool) -> String {
    let mut content = format!("directed = {}\n", directed);
    for (from, to, weight) in FIXTURE_EDGES {
        content.push_str(&format!(
            "\n[[edges]]\nfrom = \"{}\"\nto = \"{}\"\nweight = {}\n",
            from, to, weight
        ));
    }
    content
}

pub fn fixture_json(directed: bool) -> String {
    let edges: Vec<serde_json::Value> = FIXTURE_EDGES
        .iter()
        .map(|(from, to, weight)| serde_json::json!({"from": from, "to": to, "weight": weight}))
        .collect();
    serde_json::json!({"directed": directed, "edges": edges}).to_string()
}

pub fn fixture_yaml(directed: bool) -> String {
    let mut content = format!("directed: {}\nedges:\n", directed);
    for (from, to, weight) in FIXTURE_EDGES {
        content.push_str(&format!(
            "  - from: \"{}\"\n    to: \"{}\"\n    weight: {}\n",
            from, to, weight
        ));
    }
    content
}

pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
