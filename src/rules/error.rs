//! Rule-level errors.

use crate::core::{Move, NodeId, Piece, Ticket};

/// Reasons a set of players cannot form a game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StateError {
    #[display("the fugitive player is not a fugitive piece")]
    MissingFugitive,
    #[display("{piece} is listed among the pursuers but is the fugitive")]
    ExtraFugitive { piece: Piece },
    #[display("{piece} holds a {ticket} ticket reserved for the fugitive")]
    PursuerHoldsTicket { piece: Piece, ticket: Ticket },
    #[display("{piece} appears more than once")]
    DuplicatePursuer { piece: Piece },
    #[display("two pursuers share location {location}")]
    SharedLocation { location: NodeId },
    #[display("{used} rounds logged but the schedule has {rounds}")]
    RoundsExceeded { used: usize, rounds: usize },
}

/// Reasons a move cannot be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AdvanceError {
    #[display("illegal move: {mv}")]
    IllegalMove { mv: Move },
}
