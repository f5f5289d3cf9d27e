//! `info` command: graph summary

use crate::cli::{GraphFileArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::load_graph;
use graphpaths_core::error::Result;
use graphpaths_core::graph::has_cycle;

/// Execute the info command
pub fn execute(ctx: &CommandContext, args: &GraphFileArgs) -> Result<()> {
    let graph = load_graph(ctx, &args.file)?;
    let cyclic = has_cycle(&graph);

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "file": args.file.display().to_string(),
                "directed": graph.is_directed(),
                "allow_self_loops": graph.allows_self_loops(),
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "has_cycle": cyclic,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H graphpaths=1 records=1 mode=info directed={} allow_self_loops={} nodes={} edges={} has_cycle={}",
                graph.is_directed(),
                graph.allows_self_loops(),
                graph.node_count(),
                graph.edge_count(),
                cyclic
            );
        }
        OutputFormat::Human => {
            let kind = if graph.is_directed() {
                "directed"
            } else {
                "undirected"
            };
            println!("{} ({} graph)", args.file.display(), kind);
            println!("  nodes: {}", graph.node_count());
            println!("  edges: {}", graph.edge_count());
            println!("  has cycle: {}", if cyclic { "yes" } else { "no" });
            if ctx.cli.verbose {
                println!(
                    "  self-loops: {}",
                    if graph.allows_self_loops() {
                        "allowed"
                    } else {
                        "not allowed"
                    }
                );
            }
        }
    }

    Ok(())
}
