//! `paths` command: breadth-first path discovery between two nodes

use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{format_path, format_record_path, load_graph, require_node};
use graphpaths_core::error::Result;
use graphpaths_core::format::escape_record_value;
use graphpaths_core::graph::find_paths;

/// Execute the paths command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let graph = load_graph(ctx, &args.file)?;
    let from = require_node(&graph, &args.from)?;
    let to = require_node(&graph, &args.to)?;

    let mut paths = find_paths(&graph, &from, &to)?;
    // Shortest first, then lexicographic, so output is stable
    paths.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    tracing::debug!(elapsed = ?ctx.start.elapsed(), paths = paths.len(), "paths");

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "directed": graph.is_directed(),
                "found": !paths.is_empty(),
                "count": paths.len(),
                "paths": paths,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H graphpaths=1 records=1 mode=paths from={} to={} found={} paths={}",
                escape_record_value(&from),
                escape_record_value(&to),
                !paths.is_empty(),
                paths.len()
            );
            for (index, path) in paths.iter().enumerate() {
                println!("P {} {}", index + 1, format_record_path(path));
            }
        }
        OutputFormat::Human => {
            if paths.is_empty() {
                if !ctx.cli.quiet {
                    println!("No path from {} to {}", from, to);
                }
                return Ok(());
            }
            if !ctx.cli.quiet {
                let noun = if paths.len() == 1 { "path" } else { "paths" };
                println!("{} {} from {} to {}:", paths.len(), noun, from, to);
            }
            for path in &paths {
                println!("  {}", format_path(path));
            }
        }
    }

    Ok(())
}
