//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first path discovery between two nodes
//! - `dijkstra`: Weighted shortest path finding
//! - `path`: Path reconstruction from predecessor links
//! - `traverser`: Breadth-first and depth-first traversal orders
//! - `utils`: Cycle detection, reachability, subgraphs, closure and transpose

pub mod bfs;
pub mod dijkstra;
pub mod path;
pub mod traverser;
pub mod utils;

pub use bfs::find_paths;
pub use dijkstra::shortest_path;
pub use path::reconstruct_path;
pub use traverser::{breadth_first, depth_first_post_order, depth_first_pre_order};
pub use utils::{has_cycle, induced_subgraph, reachable_nodes, transitive_closure, transpose};
