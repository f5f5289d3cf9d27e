//! Whole-graph traversal orders
//!
//! Each traversal returns every node reachable from the start nodes exactly
//! once. Successors are visited in the order the graph reports them.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::graph::traversal::SuccessorGraph;

/// Breadth-first order. All start nodes are enqueued before any successor.
pub fn breadth_first<N, G>(graph: &G, starts: &[N]) -> Vec<N>
where
    N: Clone + Eq + Hash,
    G: SuccessorGraph<N> + ?Sized,
{
    let mut order = Vec::new();
    let mut seen: HashSet<N> = HashSet::new();
    let mut queue = VecDeque::new();

    for start in starts {
        if graph.contains_node(start) && seen.insert(start.clone()) {
            queue.push_back(start.clone());
        }
    }

    while let Some(node) = queue.pop_front() {
        for successor in graph.successors(&node) {
            if seen.insert(successor.clone()) {
                queue.push_back(successor);
            }
        }
        order.push(node);
    }

    order
}

/// Depth-first pre-order: a node is emitted when it is first reached
pub fn depth_first_pre_order<N, G>(graph: &G, starts: &[N]) -> Vec<N>
where
    N: Clone + Eq + Hash,
    G: SuccessorGraph<N> + ?Sized,
{
    depth_first(graph, starts, Order::Pre)
}

/// Depth-first post-order: a node is emitted once all its successors are done
pub fn depth_first_post_order<N, G>(graph: &G, starts: &[N]) -> Vec<N>
where
    N: Clone + Eq + Hash,
    G: SuccessorGraph<N> + ?Sized,
{
    depth_first(graph, starts, Order::Post)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Order {
    Pre,
    Post,
}

fn depth_first<N, G>(graph: &G, starts: &[N], order: Order) -> Vec<N>
where
    N: Clone + Eq + Hash,
    G: SuccessorGraph<N> + ?Sized,
{
    let mut result = Vec::new();
    let mut visited: HashSet<N> = HashSet::new();

    for start in starts {
        if !graph.contains_node(start) || !visited.insert(start.clone()) {
            continue;
        }
        if order == Order::Pre {
            result.push(start.clone());
        }

        // Explicit stack of (node, remaining successors) keeps deep graphs off the call stack
        let mut stack = vec![(start.clone(), graph.successors(start).into_iter())];
        while let Some((_, successors)) = stack.last_mut() {
            match successors.find(|s| !visited.contains(s)) {
                Some(next) => {
                    visited.insert(next.clone());
                    if order == Order::Pre {
                        result.push(next.clone());
                    }
                    let next_successors = graph.successors(&next).into_iter();
                    stack.push((next, next_successors));
                }
                None => {
                    if let Some((done, _)) = stack.pop() {
                        if order == Order::Post {
                            result.push(done);
                        }
                    }
                }
            }
        }
    }

    result
}
