//! In-memory mutable graph
//!
//! `MutableGraph` keeps nodes in insertion order and each node's neighbors in
//! the order their edges were inserted, so traversals over it are
//! deterministic. Edge values default to `()` for plain graphs.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::types::EndpointPair;

/// Builder for [`MutableGraph`]
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    directed: bool,
    allows_self_loops: bool,
}

impl GraphBuilder {
    pub fn directed() -> Self {
        Self {
            directed: true,
            allows_self_loops: false,
        }
    }

    pub fn undirected() -> Self {
        Self {
            directed: false,
            allows_self_loops: false,
        }
    }

    pub fn allows_self_loops(mut self, allows: bool) -> Self {
        self.allows_self_loops = allows;
        self
    }

    pub fn build<N, V>(self) -> MutableGraph<N, V>
    where
        N: Clone + Eq + Hash + Debug,
    {
        MutableGraph {
            directed: self.directed,
            allows_self_loops: self.allows_self_loops,
            nodes: Vec::new(),
            connections: HashMap::new(),
            edges: Vec::new(),
            values: HashMap::new(),
        }
    }
}

/// Neighbors of one node. Undirected graphs only use `successors`, which then
/// holds every adjacent node.
#[derive(Debug, Clone)]
struct NodeConnections<N> {
    successors: Vec<N>,
    predecessors: Vec<N>,
}

impl<N> NodeConnections<N> {
    fn new() -> Self {
        Self {
            successors: Vec::new(),
            predecessors: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MutableGraph<N, V = ()> {
    directed: bool,
    allows_self_loops: bool,
    nodes: Vec<N>,
    connections: HashMap<N, NodeConnections<N>>,
    /// Edges in insertion order, stored in the orientation they were added
    edges: Vec<(N, N)>,
    values: HashMap<(N, N), V>,
}

impl<N, V> MutableGraph<N, V>
where
    N: Clone + Eq + Hash + Debug,
{
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn allows_self_loops(&self) -> bool {
        self.allows_self_loops
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.connections.contains_key(node)
    }

    /// Every edge in insertion order
    pub fn edges(&self) -> Vec<EndpointPair<N>> {
        self.edges
            .iter()
            .map(|(u, v)| {
                if self.directed {
                    EndpointPair::ordered(u.clone(), v.clone())
                } else {
                    EndpointPair::unordered(u.clone(), v.clone())
                }
            })
            .collect()
    }

    /// Add a node; returns false if it was already present
    pub fn add_node(&mut self, node: N) -> bool {
        if self.has_node(&node) {
            return false;
        }
        self.connections.insert(node.clone(), NodeConnections::new());
        self.nodes.push(node);
        true
    }

    pub fn successors(&self, node: &N) -> Result<Vec<N>> {
        self.successor_list(node)
            .map(<[N]>::to_vec)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    pub fn predecessors(&self, node: &N) -> Result<Vec<N>> {
        let conns = self.connections_of(node)?;
        if self.directed {
            Ok(conns.predecessors.clone())
        } else {
            Ok(conns.successors.clone())
        }
    }

    /// Predecessors followed by successors, without duplicates
    pub fn adjacent_nodes(&self, node: &N) -> Result<Vec<N>> {
        let mut adjacent = self.predecessors(node)?;
        for successor in self.successors(node)? {
            if !adjacent.contains(&successor) {
                adjacent.push(successor);
            }
        }
        Ok(adjacent)
    }

    pub fn in_degree(&self, node: &N) -> Result<usize> {
        if self.directed {
            Ok(self.connections_of(node)?.predecessors.len())
        } else {
            self.degree(node)
        }
    }

    pub fn out_degree(&self, node: &N) -> Result<usize> {
        if self.directed {
            Ok(self.connections_of(node)?.successors.len())
        } else {
            self.degree(node)
        }
    }

    /// Number of edge ends at `node`; a self-loop counts twice
    pub fn degree(&self, node: &N) -> Result<usize> {
        let conns = self.connections_of(node)?;
        if self.directed {
            Ok(conns.predecessors.len() + conns.successors.len())
        } else {
            let self_loop = usize::from(conns.successors.contains(node));
            Ok(conns.successors.len() + self_loop)
        }
    }

    pub fn has_edge_connecting(&self, from: &N, to: &N) -> bool {
        self.successor_list(from)
            .is_some_and(|successors| successors.contains(to))
    }

    pub fn edge_value(&self, from: &N, to: &N) -> Option<&V> {
        self.value_between(from, to)
    }

    /// Insert an edge carrying `value`, adding missing endpoints.
    ///
    /// Returns the value previously stored on that edge, if any.
    pub fn put_edge_value(&mut self, from: N, to: N, value: V) -> Result<Option<V>> {
        if from == to && !self.allows_self_loops {
            return Err(GraphError::self_loop(&from));
        }

        if let Some(key) = self.edge_key(&from, &to) {
            return Ok(self.values.insert(key, value));
        }

        self.add_node(from.clone());
        self.add_node(to.clone());

        if let Some(conns) = self.connections.get_mut(&from) {
            conns.successors.push(to.clone());
        }
        if let Some(conns) = self.connections.get_mut(&to) {
            if self.directed {
                conns.predecessors.push(from.clone());
            } else if from != to {
                conns.successors.push(from.clone());
            }
        }

        self.edges.push((from.clone(), to.clone()));
        self.values.insert((from, to), value);
        Ok(None)
    }

    /// Remove the edge between `from` and `to`, returning its value
    pub fn remove_edge(&mut self, from: &N, to: &N) -> Option<V> {
        let (u, v) = self.edge_key(from, to)?;
        let value = self.values.remove(&(u.clone(), v.clone()));
        self.edges.retain(|(a, b)| !(a == &u && b == &v));

        if let Some(conns) = self.connections.get_mut(&u) {
            conns.successors.retain(|n| n != &v);
        }
        if let Some(conns) = self.connections.get_mut(&v) {
            if self.directed {
                conns.predecessors.retain(|n| n != &u);
            } else {
                conns.successors.retain(|n| n != &u);
            }
        }

        value
    }

    /// Remove a node and every edge incident to it; false if absent
    pub fn remove_node(&mut self, node: &N) -> bool {
        if !self.has_node(node) {
            return false;
        }

        let incident: Vec<(N, N)> = self
            .edges
            .iter()
            .filter(|(u, v)| u == node || v == node)
            .cloned()
            .collect();
        for (u, v) in incident {
            self.remove_edge(&u, &v);
        }

        self.connections.remove(node);
        self.nodes.retain(|n| n != node);
        true
    }

    /// An empty graph with the same directedness and self-loop policy
    pub fn empty_like<W>(&self) -> MutableGraph<N, W> {
        let builder = if self.directed {
            GraphBuilder::directed()
        } else {
            GraphBuilder::undirected()
        };
        builder.allows_self_loops(self.allows_self_loops).build()
    }

    pub(crate) fn node_list(&self) -> &[N] {
        &self.nodes
    }

    pub(crate) fn successor_list(&self, node: &N) -> Option<&[N]> {
        self.connections
            .get(node)
            .map(|conns| conns.successors.as_slice())
    }

    pub(crate) fn value_between(&self, from: &N, to: &N) -> Option<&V> {
        let key = self.edge_key(from, to)?;
        self.values.get(&key)
    }

    /// Stored key for the edge joining `from` and `to`, if there is one
    fn edge_key(&self, from: &N, to: &N) -> Option<(N, N)> {
        let forward = (from.clone(), to.clone());
        if self.values.contains_key(&forward) {
            return Some(forward);
        }
        if !self.directed {
            let backward = (to.clone(), from.clone());
            if self.values.contains_key(&backward) {
                return Some(backward);
            }
        }
        None
    }

    fn connections_of(&self, node: &N) -> Result<&NodeConnections<N>> {
        self.connections
            .get(node)
            .ok_or_else(|| GraphError::node_not_found(node))
    }
}

impl<N> MutableGraph<N, ()>
where
    N: Clone + Eq + Hash + Debug,
{
    /// Insert a value-less edge; returns true if the edge is new
    pub fn put_edge(&mut self, from: N, to: N) -> Result<bool> {
        Ok(self.put_edge_value(from, to, ())?.is_none())
    }
}
