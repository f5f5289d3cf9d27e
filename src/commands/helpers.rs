//! Helpers shared by the graph commands

use std::path::Path;
use std::time::Instant;

use crate::commands::dispatch::CommandContext;
use graphpaths_core::error::{GraphError, Result};
use graphpaths_core::format::escape_record_value;
use graphpaths_core::graph::{GraphDocument, MutableGraph};

/// Weighted graph with string node ids, as read from a graph file
pub type FileGraph = MutableGraph<String, u64>;

/// Load and build the graph in `file`, applying CLI overrides and config defaults
pub fn load_graph(ctx: &CommandContext, file: &Path) -> Result<FileGraph> {
    let start = Instant::now();
    let document = GraphDocument::load(file)?;
    let graph = document.build(&ctx.config.graph, ctx.cli.directed_override())?;

    tracing::debug!(
        elapsed = ?start.elapsed(),
        file = %file.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "load_graph"
    );
    Ok(graph)
}

/// Resolve a node id given on the command line
pub fn require_node(graph: &FileGraph, id: &str) -> Result<String> {
    let node = id.to_string();
    if graph.has_node(&node) {
        Ok(node)
    } else {
        Err(GraphError::NodeNotFound { node })
    }
}

/// Render a path as `a -> b -> c`
pub fn format_path(path: &[String]) -> String {
    path.join(" -> ")
}

/// Render a path for records output, quoting ids where needed
pub fn format_record_path(path: &[String]) -> String {
    path.iter()
        .map(|node| escape_record_value(node))
        .collect::<Vec<_>>()
        .join(" -> ")
}
