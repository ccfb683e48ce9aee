//! Move-choosing agents.
//!
//! [`pick_move`] is the fugitive entry point: it rebuilds a lean search
//! state from any [`Board`] and runs minimax under a time budget.

use std::time::{Duration, Instant};

use im::{OrdSet, Vector};

use crate::core::{GameRng, Move, Piece, Player};
use crate::rules::{Board, RoundCount, SearchState};

use super::config::SearchConfig;
use super::search::{MinimaxSearch, SearchError};
use super::stats::SearchStats;

/// Something that picks moves for one side of a match.
pub trait Agent {
    /// Short name for logs and reports.
    fn name(&self) -> &str;

    /// Choose one of the board's legal moves.
    fn choose_move(&mut self, board: &dyn Board, budget: Duration) -> Result<Move, SearchError>;
}

/// Choose a fugitive move with the default search configuration.
pub fn pick_move(board: &dyn Board, budget: Duration) -> Result<Move, SearchError> {
    MinimaxAgent::default().choose_move(board, budget)
}

/// Rebuild the fugitive-to-move position behind a board.
pub fn search_state(board: &dyn Board) -> Result<SearchState, SearchError> {
    if board.available_moves().is_empty() {
        return Err(SearchError::NoLegalMoves);
    }
    let location = board
        .fugitive_location()
        .ok_or(SearchError::NotFugitiveTurn)?;

    let tickets_of = |piece: Piece| {
        board
            .tickets(piece)
            .ok_or(SearchError::IncompleteBoard { piece })
    };

    let fugitive = Player::fugitive(tickets_of(Piece::Fugitive)?, location);
    let mut pursuers = Vector::new();
    for piece in board.players() {
        let Piece::Pursuer(id) = piece else { continue };
        let location = board
            .pursuer_location(id)
            .ok_or(SearchError::IncompleteBoard { piece })?;
        pursuers.push_back(Player::new(piece, tickets_of(piece)?, location));
    }

    Ok(SearchState::from_parts(
        board.setup(),
        OrdSet::unit(Piece::Fugitive),
        RoundCount(board.rounds_used()),
        fugitive,
        pursuers,
    )?)
}

/// Fugitive agent backed by minimax search.
pub struct MinimaxAgent {
    search: MinimaxSearch,
}

impl MinimaxAgent {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            search: MinimaxSearch::new(config),
        }
    }

    /// Statistics of the last move search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Agent for MinimaxAgent {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, board: &dyn Board, budget: Duration) -> Result<Move, SearchError> {
        let deadline = Instant::now().checked_add(budget);
        let state = search_state(board)?;
        self.search.search(&state, deadline)
    }
}

/// Uniformly random legal moves, for either side.
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &dyn Board, _budget: Duration) -> Result<Move, SearchError> {
        self.rng
            .choose(board.available_moves())
            .copied()
            .ok_or(SearchError::NoLegalMoves)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::{NodeId, Setup, Ticket, Tickets, Transport};
    use crate::graph::Graph;
    use crate::rules::GameState;

    fn game() -> GameState {
        let graph = Graph::from_edges((1..6).map(|n| (n, n + 1, Transport::Taxi)));
        let setup = Arc::new(Setup::new(graph, vec![false; 6]).unwrap());
        GameState::new(
            setup,
            Player::fugitive(Tickets::fugitive_default(), NodeId(3)),
            [Player::pursuer(0, Tickets::pursuer_default(), NodeId(6))],
        )
        .unwrap()
    }

    #[test]
    fn test_search_state_mirrors_board() {
        let state = game();
        let lean = search_state(&state).unwrap();

        assert_eq!(lean.moves(), state.moves());
        assert_eq!(lean.fugitive(), state.fugitive());
        assert_eq!(lean.pursuers(), state.pursuers());
        assert_eq!(lean.rounds_used(), 0);
    }

    #[test]
    fn test_pick_move_is_legal() {
        let state = game();
        let mv = pick_move(&state, Duration::from_secs(5)).unwrap();
        assert!(state.moves().contains(&mv));
    }

    #[test]
    fn test_pick_move_on_pursuer_turn() {
        let state = game();
        let mv = state.moves()[0];
        let next = state.advance(&mv).unwrap();

        assert_eq!(
            pick_move(&next, Duration::from_secs(1)),
            Err(SearchError::NotFugitiveTurn)
        );
    }

    #[test]
    fn test_random_agent_is_deterministic() {
        let state = game();
        let mut a = RandomAgent::new(7);
        let mut b = RandomAgent::new(7);

        for _ in 0..5 {
            let budget = Duration::ZERO;
            let mv = a.choose_move(&state, budget).unwrap();
            assert_eq!(mv, b.choose_move(&state, budget).unwrap());
            assert!(state.moves().contains(&mv));
            assert_eq!(mv.tickets().contains(&Ticket::Double), mv.is_double());
        }
    }
}
