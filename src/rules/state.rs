//! The game state machine.
//!
//! ## State
//!
//! One immutable value per position. `advance` checks a move against the
//! cached legal set and builds the successor; the receiver is never touched.
//! Persistent collections (`im::Vector`, `im::OrdSet`) make the copy cheap, so
//! search can branch freely.
//!
//! ## Travel logs
//!
//! The state is generic over how it remembers the fugitive's legs:
//! - [`GameState`] keeps the full `Vector<LogEntry>` for the authoritative game
//! - [`SearchState`] keeps only a [`RoundCount`], which is all the rules need
//!
//! Both share move generation, win evaluation, and transitions.
//!
//! ## Turn order
//!
//! `remaining` holds the pieces still owed a move this round. The fugitive
//! moves alone, then every pursuer in any order. Pieces that cannot make a
//! single move are dropped from `remaining` after every transition; if that
//! leaves nobody, the turn passes to the fugitive.

use std::fmt::Debug;
use std::sync::Arc;

use im::{OrdSet, Vector};
use tracing::debug;

use crate::core::{LogEntry, Move, NodeId, Piece, Player, PursuerId, Setup, Ticket};

use super::error::{AdvanceError, StateError};
use super::movegen::{double_moves, has_single_move, single_moves, Occupied};
use super::winner::{winners, Winners};

/// What a state remembers about the fugitive's journey.
pub trait TravelLog: Clone + Debug + Default {
    /// Number of fugitive legs taken so far.
    fn rounds_used(&self) -> usize;

    /// Record one leg.
    fn record(&mut self, entry: LogEntry);
}

impl TravelLog for Vector<LogEntry> {
    fn rounds_used(&self) -> usize {
        self.len()
    }

    fn record(&mut self, entry: LogEntry) {
        self.push_back(entry);
    }
}

/// A travel log that only counts legs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RoundCount(pub usize);

impl TravelLog for RoundCount {
    fn rounds_used(&self) -> usize {
        self.0
    }

    fn record(&mut self, _entry: LogEntry) {
        self.0 += 1;
    }
}

/// A game position.
#[derive(Clone, Debug)]
pub struct State<L> {
    setup: Arc<Setup>,
    remaining: OrdSet<Piece>,
    log: L,
    fugitive: Player,
    pursuers: Vector<Player>,
    winners: Winners,
    moves: Vec<Move>,
}

/// Authoritative state with the full travel log.
pub type GameState = State<Vector<LogEntry>>;

/// Lean state for search.
pub type SearchState = State<RoundCount>;

impl<L: TravelLog> State<L> {
    /// Build the opening position: empty log, fugitive to move.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rust_pursuit::core::{NodeId, Player, Setup, Tickets, Transport};
    /// use rust_pursuit::graph::Graph;
    /// use rust_pursuit::rules::GameState;
    ///
    /// let graph = Graph::from_edges([(1, 2, Transport::Taxi), (2, 3, Transport::Taxi)]);
    /// let setup = Arc::new(Setup::new(graph, vec![false, true]).unwrap());
    /// let state = GameState::new(
    ///     setup,
    ///     Player::fugitive(Tickets::fugitive_default(), NodeId(1)),
    ///     [Player::pursuer(0, Tickets::pursuer_default(), NodeId(3))],
    /// )
    /// .unwrap();
    ///
    /// assert!(state.is_fugitive_turn());
    /// assert!(!state.is_terminal());
    /// ```
    pub fn new(
        setup: Arc<Setup>,
        fugitive: Player,
        pursuers: impl IntoIterator<Item = Player>,
    ) -> Result<Self, StateError> {
        Self::from_parts(
            setup,
            OrdSet::unit(Piece::Fugitive),
            L::default(),
            fugitive,
            pursuers.into_iter().collect(),
        )
    }

    /// Build a position from its parts, validating the players and the
    /// number of rounds already logged.
    ///
    /// An empty `remaining` set means the fugitive is to move.
    pub fn from_parts(
        setup: Arc<Setup>,
        remaining: OrdSet<Piece>,
        log: L,
        fugitive: Player,
        pursuers: Vector<Player>,
    ) -> Result<Self, StateError> {
        validate(&fugitive, &pursuers)?;
        let (used, rounds) = (log.rounds_used(), setup.round_count());
        if used > rounds {
            return Err(StateError::RoundsExceeded { used, rounds });
        }
        let remaining = if remaining.is_empty() {
            OrdSet::unit(Piece::Fugitive)
        } else {
            remaining
        };
        Ok(Self::assemble(setup, remaining, log, fugitive, pursuers))
    }

    /// Derive the cached fields and settle `remaining`.
    fn assemble(
        setup: Arc<Setup>,
        remaining: OrdSet<Piece>,
        log: L,
        fugitive: Player,
        pursuers: Vector<Player>,
    ) -> Self {
        let occupied: Occupied = pursuers.iter().map(Player::location).collect();

        let player = |piece: Piece| match piece {
            Piece::Fugitive => Some(fugitive),
            Piece::Pursuer(id) => pursuers
                .iter()
                .find(|p| p.piece() == Piece::Pursuer(id))
                .copied(),
        };

        let mut remaining: OrdSet<Piece> = remaining
            .into_iter()
            .filter(|&piece| {
                player(piece).is_some_and(|p| has_single_move(&setup, &occupied, &p))
            })
            .collect();
        if remaining.is_empty() {
            remaining = OrdSet::unit(Piece::Fugitive);
        }

        let rounds_used = log.rounds_used();
        let winners = winners(&setup, &fugitive, &pursuers, &occupied, &remaining, rounds_used);

        let mut moves = Vec::new();
        if winners.is_empty() {
            let movers: Vec<Player> = std::iter::once(fugitive)
                .chain(pursuers.iter().copied())
                .filter(|p| remaining.contains(&p.piece()))
                .collect();
            for p in &movers {
                let singles = single_moves(&setup, &occupied, p, p.location());
                moves.extend(singles.into_iter().map(Move::Single));
            }
            for p in &movers {
                let doubles = double_moves(&setup, &occupied, p, p.location(), rounds_used);
                moves.extend(doubles.into_iter().map(Move::Double));
            }
        }

        Self {
            setup,
            remaining,
            log,
            fugitive,
            pursuers,
            winners,
            moves,
        }
    }

    /// Apply a legal move, producing the successor state.
    pub fn advance(&self, mv: &Move) -> Result<Self, AdvanceError> {
        if !self.moves.contains(mv) {
            debug!(mv = %mv, "rejected illegal move");
            return Err(AdvanceError::IllegalMove { mv: *mv });
        }

        let mut log = self.log.clone();
        let mut fugitive = self.fugitive;
        let mut pursuers = self.pursuers.clone();
        let tickets = mv.tickets();
        let piece = mv.piece();

        match piece {
            Piece::Fugitive => {
                fugitive = fugitive
                    .use_tickets(tickets.iter().copied())
                    .at(mv.destination());
                match mv {
                    Move::Single(m) => self.record_leg(&mut log, m.ticket, m.destination),
                    Move::Double(m) => {
                        self.record_leg(&mut log, m.ticket1, m.destination1);
                        self.record_leg(&mut log, m.ticket2, m.destination2);
                    }
                }
            }
            Piece::Pursuer(_) => {
                // Legal moves only name pursuers in the vector.
                if let Some(slot) = pursuers.iter().position(|p| p.piece() == piece) {
                    let moved = pursuers[slot]
                        .use_tickets(tickets.iter().copied())
                        .at(mv.destination());
                    pursuers.set(slot, moved);
                }
                fugitive = fugitive.give(tickets.iter().copied());
            }
        }

        let mut remaining = self.remaining.without(&piece);
        if remaining.is_empty() {
            remaining = if piece.is_fugitive() {
                pursuers.iter().map(Player::piece).collect()
            } else {
                OrdSet::unit(Piece::Fugitive)
            };
        }

        Ok(Self::assemble(
            Arc::clone(&self.setup),
            remaining,
            log,
            fugitive,
            pursuers,
        ))
    }

    fn record_leg(&self, log: &mut L, ticket: Ticket, destination: NodeId) {
        let reveal = self.setup.is_reveal_round(log.rounds_used());
        log.record(LogEntry::for_leg(ticket, destination, reveal));
    }

    /// End the pursuers' half of the round without moving anyone else.
    ///
    /// Search uses this after playing a joint pursuer move that left some
    /// pursuers out. Does nothing when the fugitive is already to move or the
    /// game is over.
    #[must_use]
    pub fn skip_pending_pursuers(&self) -> Self {
        if self.is_fugitive_turn() || self.is_terminal() {
            return self.clone();
        }
        Self::assemble(
            Arc::clone(&self.setup),
            OrdSet::unit(Piece::Fugitive),
            self.log.clone(),
            self.fugitive,
            self.pursuers.clone(),
        )
    }

    /// The same position with a counting-only log.
    #[must_use]
    pub fn lean(&self) -> SearchState {
        State {
            setup: Arc::clone(&self.setup),
            remaining: self.remaining.clone(),
            log: RoundCount(self.log.rounds_used()),
            fugitive: self.fugitive,
            pursuers: self.pursuers.clone(),
            winners: self.winners.clone(),
            moves: self.moves.clone(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn setup(&self) -> &Setup {
        &self.setup
    }

    /// The shared setup handle.
    #[must_use]
    pub fn shared_setup(&self) -> &Arc<Setup> {
        &self.setup
    }

    /// Pieces still owed a move this round.
    #[must_use]
    pub fn remaining(&self) -> &OrdSet<Piece> {
        &self.remaining
    }

    #[must_use]
    pub fn log(&self) -> &L {
        &self.log
    }

    #[must_use]
    pub fn rounds_used(&self) -> usize {
        self.log.rounds_used()
    }

    #[must_use]
    pub fn fugitive(&self) -> &Player {
        &self.fugitive
    }

    #[must_use]
    pub fn pursuers(&self) -> &Vector<Player> {
        &self.pursuers
    }

    /// Look up a pursuer by id.
    #[must_use]
    pub fn pursuer(&self, id: PursuerId) -> Option<&Player> {
        self.pursuers.iter().find(|p| p.piece() == Piece::Pursuer(id))
    }

    /// Look up any piece.
    #[must_use]
    pub fn player(&self, piece: Piece) -> Option<&Player> {
        match piece {
            Piece::Fugitive => Some(&self.fugitive),
            Piece::Pursuer(id) => self.pursuer(id),
        }
    }

    /// Locations currently held by pursuers.
    #[must_use]
    pub fn pursuer_locations(&self) -> Occupied {
        self.pursuers.iter().map(Player::location).collect()
    }

    /// Winning pieces; empty while the game is ongoing.
    #[must_use]
    pub fn winners(&self) -> &Winners {
        &self.winners
    }

    /// Legal moves; empty once the game is over.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.winners.is_empty()
    }

    #[must_use]
    pub fn is_fugitive_turn(&self) -> bool {
        self.remaining.contains(&Piece::Fugitive)
    }
}

fn validate(fugitive: &Player, pursuers: &Vector<Player>) -> Result<(), StateError> {
    if !fugitive.is_fugitive() {
        return Err(StateError::MissingFugitive);
    }

    let mut seen: Vec<Piece> = Vec::with_capacity(pursuers.len());
    let mut held: Occupied = Occupied::new();
    for p in pursuers {
        let piece = p.piece();
        if piece.is_fugitive() {
            return Err(StateError::ExtraFugitive { piece });
        }
        if let Some(&ticket) = Ticket::ALL
            .iter()
            .find(|t| t.is_fugitive_only() && p.has(**t))
        {
            return Err(StateError::PursuerHoldsTicket { piece, ticket });
        }
        if seen.contains(&piece) {
            return Err(StateError::DuplicatePursuer { piece });
        }
        if held.contains(&p.location()) {
            return Err(StateError::SharedLocation {
                location: p.location(),
            });
        }
        seen.push(piece);
        held.push(p.location());
    }
    Ok(())
}
