//! The transport graph.
//!
//! Nodes are board locations; each undirected edge carries one or more
//! transport modes. Node ids are interned to dense indices on insertion so
//! that traversals can keep their bookkeeping in flat vectors.
//!
//! ## Usage
//!
//! ```
//! use rust_pursuit::core::{NodeId, Transport};
//! use rust_pursuit::graph::Graph;
//!
//! let graph = Graph::new()
//!     .with_edge(NodeId(1), NodeId(2), Transport::Taxi)
//!     .with_edge(NodeId(1), NodeId(2), Transport::Bus)
//!     .with_edge(NodeId(2), NodeId(3), Transport::Taxi);
//!
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.transports(NodeId(2), NodeId(1)), &[Transport::Taxi, Transport::Bus]);
//! ```

use rustc_hash::FxHashMap;
use smallvec::{smallvec, SmallVec};

use crate::core::{NodeId, Transport};

/// One side of an undirected edge, as seen from its source node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// The neighbouring node.
    pub to: NodeId,

    /// Transport modes connecting the two nodes, in insertion order.
    pub transports: SmallVec<[Transport; 2]>,
}

/// Undirected, transport-labelled graph.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// Node id -> dense index.
    index: FxHashMap<NodeId, usize>,

    /// Dense index -> node id.
    nodes: Vec<NodeId>,

    /// Adjacency lists by dense index, in edge insertion order.
    adjacency: Vec<SmallVec<[Edge; 6]>>,

    /// Number of undirected node pairs joined by at least one mode.
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(a, b, transport)` triples.
    pub fn from_edges(edges: impl IntoIterator<Item = (u32, u32, Transport)>) -> Self {
        let mut graph = Self::new();
        for (a, b, transport) in edges {
            graph.add_edge(NodeId(a), NodeId(b), transport);
        }
        graph
    }

    /// Add an isolated node. Returns its dense index.
    pub fn add_node(&mut self, node: NodeId) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(node, idx);
        self.nodes.push(node);
        self.adjacency.push(SmallVec::new());
        idx
    }

    /// Connect two nodes by a transport mode, in both directions.
    ///
    /// Adding a mode that already labels the edge is a no-op.
    ///
    /// # Panics
    ///
    /// Panics on a self-loop.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, transport: Transport) {
        assert_ne!(a, b, "self-loop at {}", a);
        let ia = self.add_node(a);
        let ib = self.add_node(b);

        if Self::link(&mut self.adjacency[ia], b, transport) {
            self.edge_count += 1;
        }
        Self::link(&mut self.adjacency[ib], a, transport);
    }

    /// Add an edge (builder pattern).
    #[must_use]
    pub fn with_edge(mut self, a: NodeId, b: NodeId, transport: Transport) -> Self {
        self.add_edge(a, b, transport);
        self
    }

    /// Add `transport` to the edge towards `to`. Returns true if the edge is new.
    fn link(edges: &mut SmallVec<[Edge; 6]>, to: NodeId, transport: Transport) -> bool {
        match edges.iter_mut().find(|e| e.to == to) {
            Some(edge) => {
                if !edge.transports.contains(&transport) {
                    edge.transports.push(transport);
                }
                false
            }
            None => {
                edges.push(Edge {
                    to,
                    transports: smallvec![transport],
                });
                true
            }
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// All nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Dense index of a node, if present.
    #[must_use]
    pub fn dense_index(&self, node: NodeId) -> Option<usize> {
        self.index.get(&node).copied()
    }

    /// Node id at a dense index.
    #[must_use]
    pub fn node_at(&self, index: usize) -> NodeId {
        self.nodes[index]
    }

    /// Edges leaving `node`. Unknown nodes have no edges.
    #[must_use]
    pub fn edges(&self, node: NodeId) -> &[Edge] {
        match self.index.get(&node) {
            Some(&idx) => &self.adjacency[idx],
            None => &[],
        }
    }

    /// Neighbours of `node`, in edge insertion order.
    pub fn adjacent_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.edges(node).iter().map(|e| e.to)
    }

    /// Transport modes between two nodes; empty if they are not adjacent.
    #[must_use]
    pub fn transports(&self, a: NodeId, b: NodeId) -> &[Transport] {
        self.edges(a)
            .iter()
            .find(|e| e.to == b)
            .map_or(&[], |e| e.transports.as_slice())
    }

    #[must_use]
    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.edges(a).iter().any(|e| e.to == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges([
            (1, 2, Transport::Taxi),
            (2, 3, Transport::Bus),
            (3, 1, Transport::Underground),
        ])
    }

    #[test]
    fn test_counts() {
        let graph = triangle();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_edges_are_undirected() {
        let graph = triangle();
        assert!(graph.is_adjacent(NodeId(1), NodeId(2)));
        assert!(graph.is_adjacent(NodeId(2), NodeId(1)));
        assert_eq!(graph.transports(NodeId(3), NodeId(2)), &[Transport::Bus]);
    }

    #[test]
    fn test_multi_mode_edge() {
        let mut graph = triangle();
        graph.add_edge(NodeId(2), NodeId(1), Transport::Bus);
        graph.add_edge(NodeId(1), NodeId(2), Transport::Bus);

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.transports(NodeId(1), NodeId(2)),
            &[Transport::Taxi, Transport::Bus]
        );
    }

    #[test]
    fn test_neighbour_order_is_insertion_order() {
        let graph = triangle();
        let neighbours: Vec<_> = graph.adjacent_nodes(NodeId(1)).collect();
        assert_eq!(neighbours, vec![NodeId(2), NodeId(3)]);
    }

    #[test]
    fn test_unknown_node() {
        let graph = triangle();
        assert!(!graph.contains(NodeId(99)));
        assert!(graph.edges(NodeId(99)).is_empty());
        assert!(graph.transports(NodeId(1), NodeId(99)).is_empty());
        assert_eq!(graph.dense_index(NodeId(99)), None);
    }

    #[test]
    fn test_isolated_node() {
        let mut graph = Graph::new();
        let idx = graph.add_node(NodeId(5));
        assert_eq!(graph.node_at(idx), NodeId(5));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.add_node(NodeId(5)), idx);
    }

    #[test]
    #[should_panic(expected = "self-loop")]
    fn test_self_loop_panics() {
        Graph::new().add_edge(NodeId(1), NodeId(1), Transport::Taxi);
    }
}
