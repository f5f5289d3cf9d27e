//! Configuration for graphpaths
//!
//! The global configuration lives in `~/.config/graphpaths/config.toml`
//! (or `$GRAPHPATHS_CONFIG_DIR/config.toml`). It supplies defaults for graph
//! files that leave `directed`, `allow_self_loops` or edge weights unset, and
//! the default output format.

pub mod global;
pub mod types;

pub use global::GlobalConfig;
pub use types::{GraphDefaults, OutputConfig};
