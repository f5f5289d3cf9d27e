//! Graph model, path finding and traversal
//!
//! Provides:
//! - An in-memory mutable graph with optional edge values
//! - Graph provider traits so algorithms work over any adjacency source
//! - BFS path discovery and Dijkstra shortest paths
//! - Traversal orders and whole-graph utilities
//! - Graph definition files in TOML, JSON or YAML

pub mod algos;
pub mod datasource;
pub mod file;
pub mod memory;
pub mod traversal;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use algos::{
    breadth_first, depth_first_post_order, depth_first_pre_order, find_paths, has_cycle,
    induced_subgraph, reachable_nodes, shortest_path, transitive_closure, transpose,
};
pub use datasource::{Edge, GraphsDatasource};
pub use file::{EdgeSpec, GraphDocument, GraphFileFormat};
pub use memory::{GraphBuilder, MutableGraph};
pub use traversal::{SuccessorGraph, ValueGraph};
pub use types::{EndpointPair, PathValue};
