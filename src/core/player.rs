//! Players: a piece, its location, and its ticket wallet.
//!
//! Players are small `Copy` values. Every mutator returns a new player, so a
//! state can hand out snapshots without worrying about aliasing.

use serde::{Deserialize, Serialize};

use super::node::NodeId;
use super::piece::Piece;
use super::ticket::{Ticket, Tickets};

/// A piece on the board together with its tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    piece: Piece,
    location: NodeId,
    tickets: Tickets,
}

impl Player {
    /// Create a new player.
    #[must_use]
    pub const fn new(piece: Piece, tickets: Tickets, location: NodeId) -> Self {
        Self {
            piece,
            location,
            tickets,
        }
    }

    /// Shorthand for the fugitive.
    #[must_use]
    pub const fn fugitive(tickets: Tickets, location: NodeId) -> Self {
        Self::new(Piece::Fugitive, tickets, location)
    }

    /// Shorthand for the pursuer at `index` in turn order.
    #[must_use]
    pub const fn pursuer(index: u8, tickets: Tickets, location: NodeId) -> Self {
        Self::new(Piece::pursuer(index), tickets, location)
    }

    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[must_use]
    pub const fn location(&self) -> NodeId {
        self.location
    }

    #[must_use]
    pub const fn tickets(&self) -> &Tickets {
        &self.tickets
    }

    #[must_use]
    pub const fn is_fugitive(&self) -> bool {
        self.piece.is_fugitive()
    }

    /// Whether the player holds at least one ticket of this kind.
    #[must_use]
    pub fn has(&self, ticket: Ticket) -> bool {
        self.tickets[ticket] > 0
    }

    /// Whether the player holds at least `count` tickets of this kind.
    #[must_use]
    pub fn has_at_least(&self, ticket: Ticket, count: u32) -> bool {
        self.tickets[ticket] >= count
    }

    /// The same player at another location.
    #[must_use]
    pub fn at(mut self, location: NodeId) -> Self {
        self.location = location;
        self
    }

    /// Spend the given tickets.
    ///
    /// # Panics
    ///
    /// Panics if the player does not hold a ticket being spent. Legal moves
    /// never ask for that, so reaching it is a bookkeeping bug.
    #[must_use]
    pub fn use_tickets(mut self, tickets: impl IntoIterator<Item = Ticket>) -> Self {
        for ticket in tickets {
            let count = &mut self.tickets[ticket];
            assert!(*count > 0, "{} has no {} ticket to spend", self.piece, ticket);
            *count -= 1;
        }
        self
    }

    /// Receive the given tickets.
    #[must_use]
    pub fn give(mut self, tickets: impl IntoIterator<Item = Ticket>) -> Self {
        for ticket in tickets {
            self.tickets[ticket] += 1;
        }
        self
    }
}
