//! Fugitive move selection.
//!
//! ## Overview
//!
//! Depth-bounded minimax with alpha-beta pruning over the shared rules:
//!
//! - **MAX plies**: fugitive moves, deduplicated by destination
//! - **MIN plies**: joint pursuer moves, pruned by distance to the fugitive
//! - **Leaves**: a configurable distance-and-mobility heuristic
//! - **Deadline**: iterative deepening keeps the deepest finished answer
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use rust_pursuit::ai::pick_move;
//! use rust_pursuit::core::{NodeId, Player, Setup, Tickets, Transport};
//! use rust_pursuit::graph::Graph;
//! use rust_pursuit::rules::GameState;
//!
//! let graph = Graph::from_edges((1..6).map(|n| (n, n + 1, Transport::Taxi)));
//! let setup = Arc::new(Setup::new(graph, Setup::standard_rounds()).unwrap());
//! let state = GameState::new(
//!     setup,
//!     Player::fugitive(Tickets::fugitive_default(), NodeId(3)),
//!     [Player::pursuer(0, Tickets::pursuer_default(), NodeId(6))],
//! )
//! .unwrap();
//!
//! let mv = pick_move(&state, Duration::from_millis(200)).unwrap();
//! assert!(state.moves().contains(&mv));
//! ```

pub mod agent;
pub mod combinator;
pub mod config;
pub mod heuristic;
pub mod search;
pub mod stats;

pub use agent::{pick_move, search_state, Agent, MinimaxAgent, RandomAgent};
pub use combinator::{pursuer_combinations, Combination};
pub use config::{HeuristicWeights, SearchConfig};
pub use heuristic::evaluate;
pub use search::{Aborted, MinimaxSearch, SearchError, LOSS_SCORE, STALLED_SCORE, WIN_SCORE};
pub use stats::SearchStats;
