//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use rust_pursuit::core::{NodeId, Player, Setup, Tickets, Transport};
use rust_pursuit::graph::Graph;
use rust_pursuit::rules::GameState;

/// A 4x3 grid of taxi streets with a few faster lines on top.
///
/// ```text
///  1 -  2 -  3 -  4
///  |    |    |    |
///  5 -  6 -  7 -  8
///  |    |    |    |
///  9 - 10 - 11 - 12
/// ```
///
/// Bus 1-3, 3-11, 9-11; underground 1-12; ferry 4-9.
pub fn grid_graph() -> Graph {
    let mut graph = Graph::new();
    for row in 0..3u32 {
        for col in 0..4u32 {
            let node = row * 4 + col + 1;
            if col < 3 {
                graph.add_edge(NodeId(node), NodeId(node + 1), Transport::Taxi);
            }
            if row < 2 {
                graph.add_edge(NodeId(node), NodeId(node + 4), Transport::Taxi);
            }
        }
    }
    graph
        .with_edge(NodeId(1), NodeId(3), Transport::Bus)
        .with_edge(NodeId(3), NodeId(11), Transport::Bus)
        .with_edge(NodeId(9), NodeId(11), Transport::Bus)
        .with_edge(NodeId(1), NodeId(12), Transport::Underground)
        .with_edge(NodeId(4), NodeId(9), Transport::Ferry)
}

/// A simple path `1 - 2 - ... - n` of taxi edges.
pub fn line_graph(nodes: u32) -> Graph {
    Graph::from_edges((1..nodes).map(|n| (n, n + 1, Transport::Taxi)))
}

pub fn setup(graph: Graph, rounds: Vec<bool>) -> Arc<Setup> {
    Arc::new(Setup::new(graph, rounds).expect("fixture setup is valid"))
}

/// Opening position on the grid with default wallets.
pub fn grid_game(fugitive: u32, pursuers: &[u32]) -> GameState {
    GameState::new(
        setup(grid_graph(), Setup::standard_rounds()),
        Player::fugitive(Tickets::fugitive_default(), NodeId(fugitive)),
        pursuers.iter().enumerate().map(|(i, &at)| {
            Player::pursuer(i as u8, Tickets::pursuer_default(), NodeId(at))
        }),
    )
    .expect("fixture players are valid")
}
