use serde::Serialize;

/// The two endpoints of an edge.
///
/// Directed graphs report `Ordered` pairs, undirected graphs report
/// `Unordered` pairs. An ordered pair never equals an unordered one, and two
/// unordered pairs are equal when they join the same nodes in either order.
#[derive(Debug, Clone, Eq)]
pub enum EndpointPair<N> {
    Ordered { source: N, target: N },
    Unordered { node_u: N, node_v: N },
}

impl<N> EndpointPair<N> {
    pub fn ordered(source: N, target: N) -> Self {
        EndpointPair::Ordered { source, target }
    }

    pub fn unordered(node_u: N, node_v: N) -> Self {
        EndpointPair::Unordered { node_u, node_v }
    }

    pub fn is_ordered(&self) -> bool {
        matches!(self, EndpointPair::Ordered { .. })
    }

    /// First endpoint (the source for ordered pairs)
    pub fn node_u(&self) -> &N {
        match self {
            EndpointPair::Ordered { source, .. } => source,
            EndpointPair::Unordered { node_u, .. } => node_u,
        }
    }

    /// Second endpoint (the target for ordered pairs)
    pub fn node_v(&self) -> &N {
        match self {
            EndpointPair::Ordered { target, .. } => target,
            EndpointPair::Unordered { node_v, .. } => node_v,
        }
    }
}

impl<N: PartialEq> EndpointPair<N> {
    /// The endpoint opposite `node`, or `None` if `node` is not an endpoint
    pub fn adjacent_node(&self, node: &N) -> Option<&N> {
        if self.node_u() == node {
            Some(self.node_v())
        } else if self.node_v() == node {
            Some(self.node_u())
        } else {
            None
        }
    }
}

impl<N: PartialEq> PartialEq for EndpointPair<N> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                EndpointPair::Ordered { source, target },
                EndpointPair::Ordered {
                    source: other_source,
                    target: other_target,
                },
            ) => source == other_source && target == other_target,
            (
                EndpointPair::Unordered { node_u, node_v },
                EndpointPair::Unordered {
                    node_u: other_u,
                    node_v: other_v,
                },
            ) => {
                (node_u == other_u && node_v == other_v)
                    || (node_u == other_v && node_v == other_u)
            }
            _ => false,
        }
    }
}

/// Result of a shortest-path search: the node sequence from source to target
/// (both included) and the summed edge distance along it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathValue<N> {
    pub path: Vec<N>,
    pub distance: u64,
}

impl<N> PathValue<N> {
    pub fn new(path: Vec<N>, distance: u64) -> Self {
        Self { path, distance }
    }

    pub fn path(&self) -> &[N] {
        &self.path
    }

    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
