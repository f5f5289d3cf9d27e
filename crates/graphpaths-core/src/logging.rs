use std::cell::Cell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Work counters for a single graph search.
///
/// Searches are single-threaded and the counters live for one call, so plain
/// `Cell`s are enough.
#[derive(Debug, Default)]
pub struct TraversalMetrics {
    /// Nodes whose successors were expanded
    nodes_expanded: Cell<u64>,
    /// Successor edges examined
    edges_examined: Cell<u64>,
    /// Queue or heap entries discarded because their node was already settled
    stale_entries: Cell<u64>,
}

impl TraversalMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_expansion(&self) {
        self.nodes_expanded.set(self.nodes_expanded.get() + 1);
    }

    pub fn record_edge(&self) {
        self.edges_examined.set(self.edges_examined.get() + 1);
    }

    pub fn record_stale_entry(&self) {
        self.stale_entries.set(self.stale_entries.get() + 1);
    }

    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded.get()
    }

    pub fn edges_examined(&self) -> u64 {
        self.edges_examined.get()
    }

    pub fn stale_entries(&self) -> u64 {
        self.stale_entries.get()
    }
}

/// Log traversal metrics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let metrics = TraversalMetrics::new();
/// // ... run the search ...
/// log_traversal_metrics!(&metrics, "shortest_path");
/// ```
#[macro_export]
macro_rules! log_traversal_metrics {
    ($metrics:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            nodes_expanded = $metrics.nodes_expanded(),
            edges_examined = $metrics.edges_examined(),
            stale_entries = $metrics.stale_entries(),
            "traversal_metrics"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "load_graph");
/// // Or with additional fields:
/// trace_time!(start, "load_graph", nodes = graph.node_count());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // GRAPHPATHS_LOG overrides the CLI level, RUST_LOG is honoured as well
    let filter = EnvFilter::try_from_env("GRAPHPATHS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(expand_level(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Bare levels apply to both crates; explicit directives pass through.
fn expand_level(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("graphpaths={level},graphpaths_core={level}")
    }
}
