//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Defaults applied when a graph file leaves a setting unspecified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDefaults {
    /// Build directed graphs unless the file says otherwise
    #[serde(default = "default_directed")]
    pub directed: bool,

    /// Permit edges from a node to itself
    #[serde(default)]
    pub allow_self_loops: bool,

    /// Weight given to edges without an explicit weight
    #[serde(default = "default_weight")]
    pub default_weight: u64,
}

impl Default for GraphDefaults {
    fn default() -> Self {
        Self {
            directed: default_directed(),
            allow_self_loops: false,
            default_weight: default_weight(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_directed() -> bool {
    true
}

fn default_weight() -> u64 {
    1
}
