use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::traversal::SuccessorGraph;
use crate::{bail_missing_node, log_traversal_metrics};
use crate::logging::TraversalMetrics;

/// Find the paths from `source` to `target` that a breadth-first walk
/// discovers.
///
/// Every node other than the target keeps the first (fewest-hop) path that
/// reached it, and each node is expanded once. The result therefore holds one
/// fewest-hop path per distinct last edge into `target`; it is not an
/// enumeration of every simple path. Paths never pass through `target`, and
/// `source == target` only yields a path when the source has a self-loop.
///
/// Returns an empty list when `target` cannot be reached.
#[tracing::instrument(skip(graph), fields(source = ?source, target = ?target))]
pub fn find_paths<N, G>(graph: &G, source: &N, target: &N) -> Result<Vec<Vec<N>>>
where
    N: Clone + Eq + Hash + Debug,
    G: SuccessorGraph<N> + ?Sized,
{
    if !graph.contains_node(source) {
        bail_missing_node!(source);
    }
    if !graph.contains_node(target) {
        bail_missing_node!(target);
    }

    let metrics = TraversalMetrics::new();
    let mut results = Vec::new();
    let mut visited: HashSet<N> = HashSet::new();
    let mut paths: HashMap<N, Vec<N>> = HashMap::new();
    let mut queue = VecDeque::new();

    paths.insert(source.clone(), vec![source.clone()]);
    queue.push_back(source.clone());

    // Each node is enqueued at most once, when its path is first recorded
    while let Some(current) = queue.pop_front() {
        metrics.record_expansion();

        let current_path = paths.get(&current).cloned().unwrap_or_default();

        for successor in graph.successors(&current) {
            metrics.record_edge();
            if visited.contains(&successor) {
                continue;
            }

            if &successor == target {
                let mut found = current_path.clone();
                found.push(successor);
                results.push(found);
            } else if !paths.contains_key(&successor) {
                let mut extended = current_path.clone();
                extended.push(successor.clone());
                paths.insert(successor.clone(), extended);
                queue.push_back(successor);
            }
        }

        visited.insert(current);
    }

    log_traversal_metrics!(&metrics, "find_paths");
    tracing::debug!(paths = results.len(), "find_paths complete");

    Ok(results)
}
