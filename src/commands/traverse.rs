//! `traverse` command: breadth-first or depth-first walk from start nodes

use crate::cli::{OutputFormat, TraversalOrder, TraverseArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{load_graph, require_node};
use graphpaths_core::error::Result;
use graphpaths_core::format::escape_record_value;
use graphpaths_core::graph::{breadth_first, depth_first_post_order, depth_first_pre_order};

/// Execute the traverse command
pub fn execute(ctx: &CommandContext, args: &TraverseArgs) -> Result<()> {
    let graph = load_graph(ctx, &args.file)?;
    let starts = args
        .starts
        .iter()
        .map(|id| require_node(&graph, id))
        .collect::<Result<Vec<_>>>()?;

    let nodes = match args.order {
        TraversalOrder::Bfs => breadth_first(&graph, &starts),
        TraversalOrder::Pre => depth_first_pre_order(&graph, &starts),
        TraversalOrder::Post => depth_first_post_order(&graph, &starts),
    };

    tracing::debug!(
        elapsed = ?ctx.start.elapsed(),
        order = %args.order,
        nodes = nodes.len(),
        "traverse"
    );

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "order": args.order.to_string(),
                "starts": starts,
                "nodes": nodes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            let starts_csv = starts
                .iter()
                .map(|s| escape_record_value(s))
                .collect::<Vec<_>>()
                .join(",");
            println!(
                "H graphpaths=1 records=1 mode=traverse order={} starts={} nodes={}",
                args.order,
                starts_csv,
                nodes.len()
            );
            for node in &nodes {
                println!("N {}", escape_record_value(node));
            }
        }
        OutputFormat::Human => {
            for node in &nodes {
                println!("{}", node);
            }
        }
    }

    Ok(())
}
