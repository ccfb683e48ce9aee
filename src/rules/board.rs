//! Read-only view of a match, as seen by a move-choosing agent.
//!
//! Agents only need to read a position, never to change it, so they work
//! against this trait rather than a concrete state. [`GameState`] is the
//! authoritative implementation.

use std::sync::Arc;

use im::Vector;
use smallvec::SmallVec;

use crate::core::{LogEntry, Move, NodeId, Piece, PursuerId, Setup, Tickets};

use super::state::GameState;

/// Read-only board interface.
pub trait Board {
    /// The static setup shared by the match.
    fn setup(&self) -> Arc<Setup>;

    /// Every piece in play, fugitive first then pursuers in turn order.
    fn players(&self) -> SmallVec<[Piece; 6]>;

    /// Legal moves in the current position.
    fn available_moves(&self) -> &[Move];

    /// The fugitive's travel log so far.
    fn travel_log(&self) -> &Vector<LogEntry>;

    /// Ticket wallet for a piece, if it is in play.
    fn tickets(&self, piece: Piece) -> Option<Tickets>;

    /// Where a pursuer stands, if it is in play.
    fn pursuer_location(&self, id: PursuerId) -> Option<NodeId>;

    /// Winning pieces; empty while the game is ongoing.
    fn winners(&self) -> &[Piece];

    /// Fugitive legs taken so far.
    fn rounds_used(&self) -> usize {
        self.travel_log().len()
    }

    /// The fugitive's location, as far as the legal moves reveal it.
    ///
    /// Only known while the fugitive has a move to make.
    fn fugitive_location(&self) -> Option<NodeId> {
        self.available_moves()
            .iter()
            .find(|m| m.piece().is_fugitive())
            .map(Move::source)
    }
}

impl Board for GameState {
    fn setup(&self) -> Arc<Setup> {
        Arc::clone(self.shared_setup())
    }

    fn players(&self) -> SmallVec<[Piece; 6]> {
        std::iter::once(Piece::Fugitive)
            .chain(self.pursuers().iter().map(|p| p.piece()))
            .collect()
    }

    fn available_moves(&self) -> &[Move] {
        self.moves()
    }

    fn travel_log(&self) -> &Vector<LogEntry> {
        self.log()
    }

    fn tickets(&self, piece: Piece) -> Option<Tickets> {
        self.player(piece).map(|p| *p.tickets())
    }

    fn pursuer_location(&self, id: PursuerId) -> Option<NodeId> {
        self.pursuer(id).map(|p| p.location())
    }

    fn winners(&self) -> &[Piece] {
        GameState::winners(self)
    }
}
