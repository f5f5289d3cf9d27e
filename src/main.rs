//! graphpaths - path finding and traversal over graph definition files
//!
//! Loads a graph from TOML, JSON or YAML and answers path, traversal and
//! reachability queries about it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use graphpaths_core::config::GlobalConfig;
use graphpaths_core::error::{ExitCode as GraphExitCode, GraphError};
use graphpaths_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is global, but clap can fail before `Cli.format` exists.
            // Honour a JSON request with a structured error envelope.
            if argv_format_json {
                let graph_error = match err.kind() {
                    // Help and version are informational, not errors
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::ArgumentConflict
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        GraphError::UsageError(err.to_string())
                    }
                    _ => GraphError::Other(err.to_string()),
                };

                eprintln!("{}", graph_error.to_json());
                return ExitCode::from(graph_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let (config, format) = match GlobalConfig::load() {
        Ok(config) => {
            let format = cli.format.unwrap_or(config.output.format);
            (config, format)
        }
        Err(e) => {
            let format = cli.format.unwrap_or_default();
            return report_error(&cli, format, &e);
        }
    };

    match commands::dispatch::run(&cli, &config, format, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => report_error(&cli, format, &e),
    }
}

fn report_error(cli: &Cli, format: OutputFormat, err: &GraphError) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", err);
    }
    ExitCode::from(err.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
