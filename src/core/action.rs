//! Move representation: single-leg and double-leg turns.
//!
//! Moves are a tagged union. Code that needs leg-specific data matches on
//! `Move::Single` / `Move::Double` directly; the helpers below cover the
//! common questions (who moves, from where, to where, with which tickets).

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::node::NodeId;
use super::piece::Piece;
use super::ticket::Ticket;

/// Tickets consumed by a move. Three slots cover the double case
/// (two legs plus the double ticket itself) without heap allocation.
pub type MoveTickets = SmallVec<[Ticket; 3]>;

/// A one-leg move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SingleMove {
    pub piece: Piece,
    pub source: NodeId,
    pub ticket: Ticket,
    pub destination: NodeId,
}

impl SingleMove {
    /// Create a new single move.
    #[must_use]
    pub const fn new(piece: Piece, source: NodeId, ticket: Ticket, destination: NodeId) -> Self {
        Self {
            piece,
            source,
            ticket,
            destination,
        }
    }
}

/// A two-leg move paid for with a double ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub piece: Piece,
    pub source: NodeId,
    pub ticket1: Ticket,
    pub destination1: NodeId,
    pub ticket2: Ticket,
    pub destination2: NodeId,
}

impl DoubleMove {
    /// Create a new double move.
    #[must_use]
    pub const fn new(
        piece: Piece,
        source: NodeId,
        ticket1: Ticket,
        destination1: NodeId,
        ticket2: Ticket,
        destination2: NodeId,
    ) -> Self {
        Self {
            piece,
            source,
            ticket1,
            destination1,
            ticket2,
            destination2,
        }
    }
}

/// A complete turn for one piece.
///
/// ## Example
///
/// ```
/// use rust_pursuit::core::{Move, NodeId, Piece, SingleMove, Ticket};
///
/// let mv = Move::Single(SingleMove::new(Piece::Fugitive, NodeId(1), Ticket::Taxi, NodeId(2)));
/// assert_eq!(mv.destination(), NodeId(2));
/// assert_eq!(mv.tickets().as_slice(), &[Ticket::Taxi]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Single(SingleMove),
    Double(DoubleMove),
}

impl Move {
    /// The piece making the move.
    #[must_use]
    pub const fn piece(&self) -> Piece {
        match self {
            Move::Single(m) => m.piece,
            Move::Double(m) => m.piece,
        }
    }

    /// Where the move starts.
    #[must_use]
    pub const fn source(&self) -> NodeId {
        match self {
            Move::Single(m) => m.source,
            Move::Double(m) => m.source,
        }
    }

    /// Where the piece ends up after the whole move.
    #[must_use]
    pub const fn destination(&self) -> NodeId {
        match self {
            Move::Single(m) => m.destination,
            Move::Double(m) => m.destination2,
        }
    }

    /// Every ticket the move consumes, including the double ticket.
    #[must_use]
    pub fn tickets(&self) -> MoveTickets {
        match self {
            Move::Single(m) => smallvec![m.ticket],
            Move::Double(m) => smallvec![m.ticket1, m.ticket2, Ticket::Double],
        }
    }

    /// Number of secret tickets the move consumes.
    #[must_use]
    pub fn secret_count(&self) -> u32 {
        self.tickets().iter().filter(|&&t| t == Ticket::Secret).count() as u32
    }

    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Move::Double(_))
    }
}

impl From<SingleMove> for Move {
    fn from(m: SingleMove) -> Self {
        Move::Single(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Single(m) => {
                write!(f, "{}: {} -{}-> {}", m.piece, m.source, m.ticket, m.destination)
            }
            Move::Double(m) => write!(
                f,
                "{}: {} -{}-> {} -{}-> {}",
                m.piece, m.source, m.ticket1, m.destination1, m.ticket2, m.destination2
            ),
        }
    }
}
