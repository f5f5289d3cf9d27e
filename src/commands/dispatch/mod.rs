//! Command dispatch logic for graphpaths

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use graphpaths_core::config::GlobalConfig;
use graphpaths_core::error::Result;
use tracing::debug;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, config: &GlobalConfig, format: OutputFormat, start: Instant) -> Result<()> {
    debug!(
        elapsed = ?start.elapsed(),
        format = %format,
        config = %GlobalConfig::source_display(),
        "resolve_config"
    );

    let ctx = CommandContext::new(cli, config, format, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
