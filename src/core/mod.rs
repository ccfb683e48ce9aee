//! Core value types: tickets, pieces, players, moves, log entries, setup, RNG.
//!
//! Everything here is a plain value. Rules live in `rules`; search lives in
//! `ai`.

pub mod action;
pub mod log;
pub mod node;
pub mod piece;
pub mod player;
pub mod rng;
pub mod setup;
pub mod ticket;

pub use action::{DoubleMove, Move, MoveTickets, SingleMove};
pub use log::LogEntry;
pub use node::NodeId;
pub use piece::{Piece, PursuerId};
pub use player::Player;
pub use rng::GameRng;
pub use setup::{Setup, SetupError};
pub use ticket::{Ticket, Tickets, Transport};
