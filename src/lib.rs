//! # rust-pursuit
//!
//! Rules engine and fugitive AI for a hidden-movement pursuit board game:
//! one fugitive, several pursuers, a transport graph, and a travel log that
//! only occasionally reveals where the fugitive is.
//!
//! ## Design Principles
//!
//! 1. **One Rulebook**: The authoritative game and the search run the same
//!    move generation, win rules, and transitions. Only the travel log
//!    differs (`GameState` keeps entries, `SearchState` counts them).
//!
//! 2. **Any Number of Pursuers**: Pursuers are an ordered list, not a fixed
//!    cast. Nothing in the rules or the combinator assumes a count.
//!
//! 3. **Immutable States**: `advance` returns a new state and never touches
//!    the old one.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so every
//!   search branch owns its own state.
//!
//! - **Pruned Joint Moves**: Pursuers move as one MIN ply; the combinator
//!   keeps moves that close in on the fugitive and a few fallbacks.
//!
//! - **Deadline-Aware Search**: Iterative deepening under a time budget.
//!
//! ## Modules
//!
//! - `core`: Tickets, pieces, players, moves, log entries, setup, RNG
//! - `graph`: Transport graph and BFS distances
//! - `rules`: Move generation, win evaluation, state machine, board view
//! - `ai`: Heuristic, pursuer combinator, minimax search, agents
//! - `model`: Match model, observers, and the agent match loop

pub mod ai;
pub mod core;
pub mod graph;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    DoubleMove, GameRng, LogEntry, Move, NodeId, Piece, Player, PursuerId, Setup, SetupError,
    SingleMove, Ticket, Tickets, Transport,
};

pub use crate::graph::{distance, DistanceMap, Edge, Graph};

pub use crate::rules::{
    AdvanceError, Board, GameState, Outcome, RoundCount, SearchState, State, StateError,
    TravelLog, Winners,
};

pub use crate::ai::{
    pick_move, Agent, HeuristicWeights, MinimaxAgent, MinimaxSearch, RandomAgent, SearchConfig,
    SearchError, SearchStats,
};

pub use crate::model::{run_match, Event, MatchConfig, MatchReport, Model, Observer, ObserverError};
