//! `reachable` command

use crate::cli::{OutputFormat, ReachableArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_graph, require_node};
use graphpaths_core::error::Result;
use graphpaths_core::format::escape_record_value;
use graphpaths_core::graph::reachable_nodes;

/// Execute the reachable command
pub fn execute(ctx: &CommandContext, args: &ReachableArgs) -> Result<()> {
    let graph = load_graph(ctx, &args.file)?;
    let node = require_node(&graph, &args.node)?;
    let nodes = reachable_nodes(&graph, &node)?;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "node": node,
                "count": nodes.len(),
                "nodes": nodes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H graphpaths=1 records=1 mode=reachable node={} nodes={}",
                escape_record_value(&node),
                nodes.len()
            );
            for reached in &nodes {
                println!("N {}", escape_record_value(reached));
            }
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{} nodes reachable from {}:", nodes.len(), node);
            }
            for reached in &nodes {
                println!("  {}", reached);
            }
        }
    }

    Ok(())
}
