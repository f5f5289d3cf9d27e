//! `shortest` command: lowest-weight path between two nodes

use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{format_path, format_record_path, load_graph, require_node};
use graphpaths_core::error::Result;
use graphpaths_core::format::escape_record_value;
use graphpaths_core::graph::shortest_path;

/// Execute the shortest command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let graph = load_graph(ctx, &args.file)?;
    let from = require_node(&graph, &args.from)?;
    let to = require_node(&graph, &args.to)?;

    let result = shortest_path(&graph, &from, &to, |weight: &u64| *weight)?;

    tracing::debug!(elapsed = ?ctx.start.elapsed(), found = result.is_some(), "shortest");

    match ctx.format {
        OutputFormat::Json => {
            let output = match &result {
                Some(value) => serde_json::json!({
                    "from": from,
                    "to": to,
                    "found": true,
                    "distance": value.distance(),
                    "hops": value.hops(),
                    "path": value.path(),
                }),
                None => serde_json::json!({
                    "from": from,
                    "to": to,
                    "found": false,
                    "distance": null,
                    "hops": null,
                    "path": [],
                }),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            let mut header = format!(
                "H graphpaths=1 records=1 mode=shortest from={} to={} found={}",
                escape_record_value(&from),
                escape_record_value(&to),
                result.is_some()
            );
            if let Some(value) = &result {
                header.push_str(&format!(
                    " distance={} hops={}",
                    value.distance(),
                    value.hops()
                ));
            }
            println!("{}", header);
            if let Some(value) = &result {
                println!("P 1 {}", format_record_path(value.path()));
            }
        }
        OutputFormat::Human => match &result {
            Some(value) => {
                println!("{}", format_path(value.path()));
                if !ctx.cli.quiet {
                    println!("distance: {}", value.distance());
                    println!("hops: {}", value.hops());
                }
            }
            None => {
                if !ctx.cli.quiet {
                    println!("No path from {} to {}", from, to);
                }
            }
        },
    }

    Ok(())
}
