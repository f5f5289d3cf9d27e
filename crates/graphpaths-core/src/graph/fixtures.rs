//! Shared test graph: nine nodes, fourteen weighted edges

use crate::graph::datasource::{Edge, GraphsDatasource};
use crate::graph::memory::MutableGraph;

pub(crate) const WEIGHTED_EDGES: [(i32, i32, u64); 14] = [
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

pub(crate) fn datasource() -> GraphsDatasource<i32> {
    GraphsDatasource::new(
        WEIGHTED_EDGES
            .iter()
            .map(|&(u, v, _)| Edge::of(u, v))
            .collect(),
    )
}

pub(crate) fn weighted_datasource() -> GraphsDatasource<i32, u64> {
    GraphsDatasource::new(
        WEIGHTED_EDGES
            .iter()
            .map(|&(u, v, w)| Edge::with_value(u, v, w))
            .collect(),
    )
}

pub(crate) fn graph(directed: bool) -> MutableGraph<i32> {
    datasource().build_graph(directed, false).unwrap()
}

pub(crate) fn value_graph(directed: bool) -> MutableGraph<i32, u64> {
    weighted_datasource()
        .build_value_graph(directed, false)
        .unwrap()
}
