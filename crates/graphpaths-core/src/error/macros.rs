//! Error macros for graphpaths

/// Macro for creating node-not-found errors
#[macro_export]
macro_rules! bail_missing_node {
    ($node:expr) => {
        return Err($crate::error::GraphError::node_not_found($node))
    };
}
