//! Path reconstruction from predecessor links

use std::collections::HashMap;
use std::hash::Hash;

/// Walk `predecessors` from `to` back to `from` and return the path in
/// forward order, both endpoints included.
///
/// Returns `None` when the chain breaks before reaching `from`.
pub fn reconstruct_path<N>(from: &N, to: &N, predecessors: &HashMap<N, N>) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash,
{
    let mut path = vec![to.clone()];
    let mut current = to;

    while current != from {
        let pred = predecessors.get(current)?;
        path.push(pred.clone());
        current = pred;
        // A cycle in the links would otherwise never reach `from`
        if path.len() > predecessors.len() + 1 {
            return None;
        }
    }

    path.reverse();
    Some(path)
}
