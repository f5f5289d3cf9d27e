use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::algos::path::reconstruct_path;
use crate::graph::traversal::ValueGraph;
use crate::graph::types::PathValue;
use crate::{bail_missing_node, log_traversal_metrics};
use crate::logging::TraversalMetrics;

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance)
#[derive(Debug, Clone)]
pub struct HeapEntry<N> {
    pub node: N,
    pub distance: u64,
}

impl<N: PartialEq> PartialEq for HeapEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.distance == other.distance
    }
}

impl<N: Eq> Eq for HeapEntry<N> {}

impl<N: Eq> PartialOrd for HeapEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Eq> Ord for HeapEntry<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance.cmp(&other.distance)
    }
}

/// State tracked during a shortest-path search
struct DijkstraState<N> {
    visited: HashSet<N>,
    heap: BinaryHeap<Reverse<HeapEntry<N>>>,
    distances: HashMap<N, u64>,
    predecessors: HashMap<N, N>,
}

impl<N> DijkstraState<N>
where
    N: Clone + Eq + Hash,
{
    fn new(source: &N) -> Self {
        let mut state = Self {
            visited: HashSet::new(),
            heap: BinaryHeap::new(),
            distances: HashMap::new(),
            predecessors: HashMap::new(),
        };
        state.distances.insert(source.clone(), 0);
        state.heap.push(Reverse(HeapEntry {
            node: source.clone(),
            distance: 0,
        }));
        state
    }

    /// Record `candidate` for `node` if it beats the known distance
    fn relax(&mut self, node: N, via: &N, candidate: u64) {
        let improves = self
            .distances
            .get(&node)
            .is_none_or(|&known| candidate < known);
        if !improves {
            return;
        }

        self.distances.insert(node.clone(), candidate);
        self.predecessors.insert(node.clone(), via.clone());
        self.heap.push(Reverse(HeapEntry {
            node,
            distance: candidate,
        }));
    }
}

/// Find the minimum-distance path from `source` to `target`.
///
/// `distance_fn` maps an edge value to its non-negative distance; totals
/// saturate at `u64::MAX`. Returns `Ok(None)` when `target` is unreachable.
///
/// The heap has no decrease-key: a node may be pushed several times and the
/// stale entries are skipped when popped.
#[tracing::instrument(skip(graph, distance_fn), fields(source = ?source, target = ?target, settled = tracing::field::Empty))]
pub fn shortest_path<N, V, G, F>(
    graph: &G,
    source: &N,
    target: &N,
    distance_fn: F,
) -> Result<Option<PathValue<N>>>
where
    N: Clone + Eq + Hash + Debug,
    G: ValueGraph<N, V> + ?Sized,
    F: Fn(&V) -> u64,
{
    if !graph.contains_node(source) {
        bail_missing_node!(source);
    }
    if !graph.contains_node(target) {
        bail_missing_node!(target);
    }
    if source == target {
        return Ok(Some(PathValue::new(vec![source.clone()], 0)));
    }

    let metrics = TraversalMetrics::new();
    let mut state = DijkstraState::new(source);

    while let Some(Reverse(HeapEntry { node, distance })) = state.heap.pop() {
        if !state.visited.insert(node.clone()) {
            metrics.record_stale_entry();
            continue;
        }
        metrics.record_expansion();

        for successor in graph.successors(&node) {
            metrics.record_edge();
            if state.visited.contains(&successor) {
                continue;
            }
            let Some(value) = graph.edge_value(&node, &successor) else {
                continue;
            };
            let candidate = distance.saturating_add(distance_fn(&value));
            state.relax(successor, &node, candidate);
        }
    }

    tracing::Span::current().record("settled", state.visited.len());
    log_traversal_metrics!(&metrics, "shortest_path");

    let Some(&distance) = state.distances.get(target) else {
        tracing::debug!("target unreachable");
        return Ok(None);
    };

    Ok(reconstruct_path(source, target, &state.predecessors)
        .map(|path| PathValue::new(path, distance)))
}
