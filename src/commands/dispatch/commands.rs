//! Command implementations for all graphpaths commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{info, paths, reachable, shortest, traverse};
use graphpaths_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Paths(args) => paths::execute(ctx, args),
            Commands::Shortest(args) => shortest::execute(ctx, args),
            Commands::Traverse(args) => traverse::execute(ctx, args),
            Commands::Reachable(args) => reachable::execute(ctx, args),
            Commands::Info(args) => info::execute(ctx, args),
        }
    }
}
