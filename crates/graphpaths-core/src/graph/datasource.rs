//! Edge lists used to seed graphs
//!
//! `GraphsDatasource` keeps the raw `(node1, node2, value)` triples a graph was
//! built from, so callers can compare what a graph reports against what went
//! into it.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::memory::{GraphBuilder, MutableGraph};
use crate::graph::types::EndpointPair;

/// One edge of a datasource; `value` is `()` for plain graphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N, V = ()> {
    pub node1: N,
    pub node2: N,
    pub value: V,
}

impl<N> Edge<N, ()> {
    pub fn of(node1: N, node2: N) -> Self {
        Self {
            node1,
            node2,
            value: (),
        }
    }
}

impl<N, V> Edge<N, V> {
    pub fn with_value(node1: N, node2: N, value: V) -> Self {
        Self {
            node1,
            node2,
            value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GraphsDatasource<N, V = ()> {
    edges: Vec<Edge<N, V>>,
}

impl<N, V> GraphsDatasource<N, V>
where
    N: Clone + Eq + Hash + Debug,
{
    pub fn new(edges: Vec<Edge<N, V>>) -> Self {
        Self { edges }
    }

    pub fn edges(&self) -> &[Edge<N, V>] {
        &self.edges
    }

    /// Graph with every edge of the datasource and no edge values
    pub fn build_graph(&self, directed: bool, allows_self_loops: bool) -> Result<MutableGraph<N>> {
        let mut graph = builder(directed, allows_self_loops).build();
        for edge in &self.edges {
            graph.put_edge(edge.node1.clone(), edge.node2.clone())?;
        }
        Ok(graph)
    }

    /// Graph with every edge of the datasource carrying its value.
    ///
    /// A repeated edge keeps the value of its last occurrence.
    pub fn build_value_graph(
        &self,
        directed: bool,
        allows_self_loops: bool,
    ) -> Result<MutableGraph<N, V>>
    where
        V: Clone,
    {
        let mut graph = builder(directed, allows_self_loops).build();
        for edge in &self.edges {
            graph.put_edge_value(edge.node1.clone(), edge.node2.clone(), edge.value.clone())?;
        }
        Ok(graph)
    }

    /// Distinct nodes in the order they first appear
    pub fn nodes(&self) -> Vec<N> {
        let mut nodes = Vec::new();
        for edge in &self.edges {
            push_unique(&mut nodes, &edge.node1);
            push_unique(&mut nodes, &edge.node2);
        }
        nodes
    }

    /// Edges as ordered pairs; `inverse` swaps source and target
    pub fn ordered_edges(&self, inverse: bool) -> Vec<EndpointPair<N>> {
        self.edges
            .iter()
            .map(|e| {
                let (u, v) = orient(e, inverse);
                EndpointPair::ordered(u, v)
            })
            .collect()
    }

    /// Edges as unordered pairs; `inverse` swaps the reported endpoints
    pub fn unordered_edges(&self, inverse: bool) -> Vec<EndpointPair<N>> {
        self.edges
            .iter()
            .map(|e| {
                let (u, v) = orient(e, inverse);
                EndpointPair::unordered(u, v)
            })
            .collect()
    }

    /// Nodes sharing an edge with `node`, in either direction
    pub fn neighbors(&self, node: &N) -> Vec<N> {
        let mut result = Vec::new();
        for edge in &self.edges {
            if &edge.node2 == node {
                push_unique(&mut result, &edge.node1);
            } else if &edge.node1 == node {
                push_unique(&mut result, &edge.node2);
            }
        }
        result
    }

    /// Nodes with an edge into `node`
    pub fn pre_neighbors(&self, node: &N) -> Vec<N> {
        let mut result = Vec::new();
        for edge in self.edges.iter().filter(|e| &e.node2 == node) {
            push_unique(&mut result, &edge.node1);
        }
        result
    }

    /// Nodes with an edge out of `node`
    pub fn post_neighbors(&self, node: &N) -> Vec<N> {
        let mut result = Vec::new();
        for edge in self.edges.iter().filter(|e| &e.node1 == node) {
            push_unique(&mut result, &edge.node2);
        }
        result
    }
}

fn builder(directed: bool, allows_self_loops: bool) -> GraphBuilder {
    let builder = if directed {
        GraphBuilder::directed()
    } else {
        GraphBuilder::undirected()
    };
    builder.allows_self_loops(allows_self_loops)
}

fn orient<N: Clone, V>(edge: &Edge<N, V>, inverse: bool) -> (N, N) {
    if inverse {
        (edge.node2.clone(), edge.node1.clone())
    } else {
        (edge.node1.clone(), edge.node2.clone())
    }
}

fn push_unique<N: Clone + PartialEq>(list: &mut Vec<N>, node: &N) {
    if !list.contains(node) {
        list.push(node.clone());
    }
}
