//! Error types and exit codes for graphpaths
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing node, invalid graph file, etc.)
//!
//! A missing path between two nodes is not an error; path searches return
//! an empty result instead.

mod macros;

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes used by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing node, invalid graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphpaths operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("node not found: {node}")]
    NodeNotFound { node: String },

    #[error("self-loops are not allowed in this graph (node {node})")]
    SelfLoopsNotAllowed { node: String },

    #[error("invalid graph file {path:?}: {reason}")]
    InvalidGraphFile { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for a node that is not part of the graph.
    ///
    /// Nodes are rendered with their `Debug` form so that any node type can
    /// be reported.
    pub fn node_not_found(node: impl fmt::Debug) -> Self {
        GraphError::NodeNotFound {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for a self-loop inserted into a graph that forbids them
    pub fn self_loop(node: impl fmt::Debug) -> Self {
        GraphError::SelfLoopsNotAllowed {
            node: format!("{:?}", node),
        }
    }

    /// Create an error for a graph file that could not be parsed
    pub fn invalid_graph_file(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        GraphError::InvalidGraphFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl fmt::Display,
        supported: impl fmt::Display,
    ) -> Self {
        GraphError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::Unsupported { .. } => ExitCode::Usage,

            GraphError::NodeNotFound { .. }
            | GraphError::SelfLoopsNotAllowed { .. }
            | GraphError::InvalidGraphFile { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::Yaml(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::Unsupported { .. } => "unsupported",
            GraphError::NodeNotFound { .. } => "node_not_found",
            GraphError::SelfLoopsNotAllowed { .. } => "self_loops_not_allowed",
            GraphError::InvalidGraphFile { .. } => "invalid_graph_file",
            GraphError::Io(_) => "io_error",
            GraphError::Yaml(_) => "yaml_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graphpaths operations
pub type Result<T> = std::result::Result<T, GraphError>;
