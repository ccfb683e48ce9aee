//! Game rules: move generation, win evaluation, and the state machine.
//!
//! - `movegen`: legal single and double moves for one player
//! - `winner`: terminal-condition evaluation
//! - `state`: immutable positions and the `advance` transition
//! - `board`: read-only view used by agents

pub mod board;
pub mod error;
pub mod movegen;
pub mod state;
pub mod winner;

pub use board::Board;
pub use error::{AdvanceError, StateError};
pub use movegen::{double_moves, has_single_move, single_moves, Occupied};
pub use state::{GameState, RoundCount, SearchState, State, TravelLog};
pub use winner::{winners, Outcome, Winners};
