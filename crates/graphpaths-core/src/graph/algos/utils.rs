//! Whole-graph utilities: cycle detection, reachability, subgraphs,
//! closure and transpose.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::algos::traverser::breadth_first;
use crate::graph::memory::{GraphBuilder, MutableGraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState {
    Pending,
    Complete,
}

/// Whether the graph contains a cycle.
///
/// Directed graphs need a directed cycle (a self-loop counts). Undirected
/// graphs need a self-loop or a cycle that does not walk back over the edge
/// it arrived on.
pub fn has_cycle<N, V>(graph: &MutableGraph<N, V>) -> bool
where
    N: Clone + Eq + Hash + Debug,
{
    let edge_count = graph.edge_count();
    if edge_count == 0 {
        return false;
    }
    if !graph.is_directed() && edge_count >= graph.node_count() {
        return true;
    }

    let directed = graph.is_directed();
    let mut states: HashMap<N, NodeState> = HashMap::new();

    for start in graph.nodes() {
        if states.contains_key(start) {
            continue;
        }
        states.insert(start.clone(), NodeState::Pending);

        let mut stack = vec![(start.clone(), None::<N>, successors_of(graph, start))];
        while let Some((node, previous, successors)) = stack.last_mut() {
            let next = successors.find(|s| directed || previous.as_ref() != Some(s));
            match next {
                Some(next) => match states.get(&next) {
                    Some(NodeState::Pending) => return true,
                    Some(NodeState::Complete) => {}
                    None => {
                        let parent = node.clone();
                        states.insert(next.clone(), NodeState::Pending);
                        let next_successors = successors_of(graph, &next);
                        stack.push((next, Some(parent), next_successors));
                    }
                },
                None => {
                    if let Some((done, _, _)) = stack.pop() {
                        states.insert(done, NodeState::Complete);
                    }
                }
            }
        }
    }

    false
}

/// Nodes reachable from `node` in breadth-first order, `node` first
pub fn reachable_nodes<N, V>(graph: &MutableGraph<N, V>, node: &N) -> Result<Vec<N>>
where
    N: Clone + Eq + Hash + Debug,
{
    if !graph.has_node(node) {
        return Err(GraphError::node_not_found(node));
    }
    Ok(breadth_first(graph, std::slice::from_ref(node)))
}

/// The subgraph made of `nodes` and every edge of `graph` between them
pub fn induced_subgraph<N, V>(graph: &MutableGraph<N, V>, nodes: &[N]) -> Result<MutableGraph<N, V>>
where
    N: Clone + Eq + Hash + Debug,
    V: Clone,
{
    let mut subgraph = graph.empty_like();
    for node in nodes {
        if !graph.has_node(node) {
            return Err(GraphError::node_not_found(node));
        }
        subgraph.add_node(node.clone());
    }

    for node in nodes {
        for successor in graph.successors(node)? {
            if !subgraph.has_node(&successor) {
                continue;
            }
            if let Some(value) = graph.edge_value(node, &successor) {
                subgraph.put_edge_value(node.clone(), successor, value.clone())?;
            }
        }
    }

    Ok(subgraph)
}

/// A graph with an edge from every node to each node it can reach,
/// itself included
pub fn transitive_closure<N, V>(graph: &MutableGraph<N, V>) -> Result<MutableGraph<N>>
where
    N: Clone + Eq + Hash + Debug,
{
    let builder = if graph.is_directed() {
        GraphBuilder::directed()
    } else {
        GraphBuilder::undirected()
    };
    let mut closure: MutableGraph<N> = builder.allows_self_loops(true).build();

    for node in graph.nodes() {
        closure.add_node(node.clone());
    }
    for node in graph.nodes() {
        for reachable in breadth_first(graph, std::slice::from_ref(node)) {
            closure.put_edge(node.clone(), reachable)?;
        }
    }

    tracing::debug!(
        nodes = closure.node_count(),
        edges = closure.edge_count(),
        "transitive closure built"
    );
    Ok(closure)
}

/// The graph with every edge reversed. Undirected graphs come back unchanged.
pub fn transpose<N, V>(graph: &MutableGraph<N, V>) -> Result<MutableGraph<N, V>>
where
    N: Clone + Eq + Hash + Debug,
    V: Clone,
{
    if !graph.is_directed() {
        return Ok(graph.clone());
    }

    let mut transposed = graph.empty_like();
    for node in graph.nodes() {
        transposed.add_node(node.clone());
    }
    for edge in graph.edges() {
        let (source, target) = (edge.node_u(), edge.node_v());
        if let Some(value) = graph.edge_value(source, target) {
            transposed.put_edge_value(target.clone(), source.clone(), value.clone())?;
        }
    }

    Ok(transposed)
}

fn successors_of<N, V>(graph: &MutableGraph<N, V>, node: &N) -> std::vec::IntoIter<N>
where
    N: Clone + Eq + Hash + Debug,
{
    graph.successors(node).unwrap_or_default().into_iter()
}
