//! Shared helpers for the core integration tests

use std::collections::HashMap;

use graphpaths_core::graph::{Edge, GraphsDatasource, MutableGraph, SuccessorGraph, ValueGraph};

pub const WEIGHTED_EDGES: [(i32, i32, u64); 14] = [
    (1, 2, 1),
    (2, 3, 3),
    (2, 4, 5),
    (2, 5, 3),
    (2, 7, 4),
    (3, 8, 2),
    (4, 5, 2),
    (4, 6, 3),
    (4, 8, 6),
    (5, 6, 1),
    (6, 7, 5),
    (7, 8, 3),
    (8, 9, 2),
    (9, 1, 3),
];

pub fn value_graph(directed: bool) -> MutableGraph<i32, u64> {
    GraphsDatasource::new(
        WEIGHTED_EDGES
            .iter()
            .map(|&(u, v, w)| Edge::with_value(u, v, w))
            .collect(),
    )
    .build_value_graph(directed, false)
    .unwrap()
}

/// Read-only adjacency list, used to check the algorithms only rely on the
/// provider traits
#[derive(Default)]
pub struct AdjacencyList {
    order: Vec<&'static str>,
    out: HashMap<&'static str, Vec<(&'static str, u64)>>,
}

impl AdjacencyList {
    pub fn from_edges(edges: &[(&'static str, &'static str, u64)]) -> Self {
        let mut list = Self::default();
        for &(from, to, weight) in edges {
            for node in [from, to] {
                if !list.out.contains_key(node) {
                    list.order.push(node);
                    list.out.insert(node, Vec::new());
                }
            }
            if let Some(targets) = list.out.get_mut(from) {
                targets.push((to, weight));
            }
        }
        list
    }
}

impl SuccessorGraph<&'static str> for AdjacencyList {
    fn nodes(&self) -> Vec<&'static str> {
        self.order.clone()
    }

    fn successors(&self, node: &&'static str) -> Vec<&'static str> {
        self.out
            .get(node)
            .map(|targets| targets.iter().map(|(to, _)| *to).collect())
            .unwrap_or_default()
    }

    fn contains_node(&self, node: &&'static str) -> bool {
        self.out.contains_key(node)
    }
}

impl ValueGraph<&'static str, u64> for AdjacencyList {
    fn edge_value(&self, from: &&'static str, to: &&'static str) -> Option<u64> {
        self.out
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }
}

/// a -> b -> d -> e and a -> c -> d, with the longer-hop route lighter
pub fn diamond() -> AdjacencyList {
    AdjacencyList::from_edges(&[
        ("a", "b", 1),
        ("a", "c", 4),
        ("b", "d", 5),
        ("c", "d", 1),
        ("d", "e", 1),
    ])
}
