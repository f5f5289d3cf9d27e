//! Subcommand argument structs

use std::fmt;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

#[derive(Args, Debug, Clone)]
pub struct GraphFileArgs {
    /// Graph definition file (.toml, .json, .yaml or .yml)
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Graph definition file (.toml, .json, .yaml or .yml)
    pub file: PathBuf,

    /// Start node
    pub from: String,

    /// End node
    pub to: String,
}

#[derive(Args, Debug, Clone)]
pub struct TraverseArgs {
    /// Graph definition file (.toml, .json, .yaml or .yml)
    pub file: PathBuf,

    /// Start nodes
    #[arg(required = true)]
    pub starts: Vec<String>,

    /// Traversal order
    #[arg(long, value_enum, default_value = "bfs")]
    pub order: TraversalOrder,
}

#[derive(Args, Debug, Clone)]
pub struct ReachableArgs {
    /// Graph definition file (.toml, .json, .yaml or .yml)
    pub file: PathBuf,

    /// Node to start from
    pub node: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraversalOrder {
    /// Breadth-first
    Bfs,
    /// Depth-first, nodes listed when first reached
    Pre,
    /// Depth-first, nodes listed after their successors
    Post,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::Bfs => write!(f, "bfs"),
            TraversalOrder::Pre => write!(f, "pre"),
            TraversalOrder::Post => write!(f, "post"),
        }
    }
}
