//! Output format handling for graphpaths
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format with a header line and one record per item

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Output format for graphpaths commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records output
    Records,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(GraphError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Quote a records field value when it contains whitespace or quotes
pub fn escape_record_value(value: &str) -> String {
    if value.is_empty() || value.contains(char::is_whitespace) || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\\\""))
    } else {
        value.to_string()
    }
}
