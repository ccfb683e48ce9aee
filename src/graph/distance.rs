//! Unweighted shortest-path distances.
//!
//! Breadth-first search over the transport graph, ignoring which modes label
//! each edge. "No path" is always an explicit `None`; callers decide what an
//! unreachable node means for them.

use std::collections::VecDeque;

use crate::core::NodeId;

use super::network::Graph;

const UNVISITED: u32 = u32::MAX;

/// Hop count of the first path BFS discovers from `from` to `to`.
///
/// Returns `Some(0)` for identical endpoints and `None` when `to` cannot be
/// reached (including when either node is not on the graph).
#[must_use]
pub fn distance(graph: &Graph, from: NodeId, to: NodeId) -> Option<u32> {
    if from == to {
        return Some(0);
    }
    let source = graph.dense_index(from)?;
    let target = graph.dense_index(to)?;

    let mut dist = vec![UNVISITED; graph.node_count()];
    let mut queue = VecDeque::new();
    dist[source] = 0;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next = dist[current] + 1;
        for neighbour in graph.adjacent_nodes(graph.node_at(current)) {
            let idx = graph.dense_index(neighbour)?;
            if dist[idx] == UNVISITED {
                if idx == target {
                    return Some(next);
                }
                dist[idx] = next;
                queue.push_back(idx);
            }
        }
    }

    None
}

/// Distances from one source to every node, computed with a single BFS.
///
/// The graph is undirected, so `get(x)` is also the distance from `x` back to
/// the source.
#[derive(Clone, Debug)]
pub struct DistanceMap {
    source: NodeId,
    dist: Vec<u32>,
}

impl DistanceMap {
    /// Run BFS from `source`.
    #[must_use]
    pub fn from_source(graph: &Graph, source: NodeId) -> Self {
        let mut dist = vec![UNVISITED; graph.node_count()];

        if let Some(start) = graph.dense_index(source) {
            let mut queue = VecDeque::new();
            dist[start] = 0;
            queue.push_back(start);

            while let Some(current) = queue.pop_front() {
                let next = dist[current] + 1;
                for edge in graph.edges(graph.node_at(current)) {
                    if let Some(idx) = graph.dense_index(edge.to) {
                        if dist[idx] == UNVISITED {
                            dist[idx] = next;
                            queue.push_back(idx);
                        }
                    }
                }
            }
        }

        Self { source, dist }
    }

    /// The node distances are measured from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance to `node`, or `None` if it is unreachable.
    #[must_use]
    pub fn get(&self, node: NodeId, graph: &Graph) -> Option<u32> {
        if node == self.source {
            return Some(0);
        }
        graph
            .dense_index(node)
            .and_then(|idx| self.dist.get(idx).copied())
            .filter(|&d| d != UNVISITED)
    }
}
