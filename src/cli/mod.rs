//! CLI argument parsing for graphpaths
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --directed, --undirected

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};

pub use args::{GraphFileArgs, PathArgs, ReachableArgs, TraversalOrder, TraverseArgs};
pub use graphpaths_core::format::OutputFormat;
use parse::parse_output_format;

/// graphpaths - path finding and traversal over graph files
#[derive(Parser, Debug)]
#[command(name = "graphpaths")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to `output.format` from the config file)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter, either a level (warn, debug, ...) or tracing directives
    #[arg(long, global = true, env = "GRAPHPATHS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Treat the graph as directed, whatever the file says
    #[arg(long, global = true, conflicts_with = "undirected")]
    pub directed: bool,

    /// Treat the graph as undirected, whatever the file says
    #[arg(long, global = true)]
    pub undirected: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Directedness forced on the command line, if any
    pub fn directed_override(&self) -> Option<bool> {
        match (self.directed, self.undirected) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the paths a breadth-first search finds between two nodes
    Paths(PathArgs),

    /// Find the lowest-weight path between two nodes
    Shortest(PathArgs),

    /// Walk the graph from one or more start nodes
    Traverse(TraverseArgs),

    /// List every node reachable from a node
    Reachable(ReachableArgs),

    /// Summarize a graph file
    Info(GraphFileArgs),
}
