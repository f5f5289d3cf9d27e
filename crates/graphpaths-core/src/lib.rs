//! Graphpaths Core Library
//!
//! Graph model, path finding and traversal algorithms behind the
//! `graphpaths` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
