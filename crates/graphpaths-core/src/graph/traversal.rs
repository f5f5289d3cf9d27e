use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::memory::MutableGraph;

/// Trait for providing graph adjacency to the search algorithms
pub trait SuccessorGraph<N> {
    /// Every node, in the graph's iteration order
    fn nodes(&self) -> Vec<N>;
    /// Nodes reachable over one outgoing edge; empty for unknown nodes
    fn successors(&self, node: &N) -> Vec<N>;
    fn contains_node(&self, node: &N) -> bool;
}

/// A graph whose edges carry values (weights)
pub trait ValueGraph<N, V>: SuccessorGraph<N> {
    fn edge_value(&self, from: &N, to: &N) -> Option<V>;
}

impl<N, V> SuccessorGraph<N> for MutableGraph<N, V>
where
    N: Clone + Eq + Hash + Debug,
{
    fn nodes(&self) -> Vec<N> {
        self.node_list().to_vec()
    }

    fn successors(&self, node: &N) -> Vec<N> {
        self.successor_list(node).map(<[N]>::to_vec).unwrap_or_default()
    }

    fn contains_node(&self, node: &N) -> bool {
        self.has_node(node)
    }
}

impl<N, V> ValueGraph<N, V> for MutableGraph<N, V>
where
    N: Clone + Eq + Hash + Debug,
    V: Clone,
{
    fn edge_value(&self, from: &N, to: &N) -> Option<V> {
        self.value_between(from, to).cloned()
    }
}
