//! Minimax with alpha-beta pruning for the fugitive.
//!
//! MAX plies are fugitive moves, MIN plies are joint pursuer moves from the
//! combinator. Depth counts plies below the root move. The search deepens
//! one ply at a time and keeps the answer of the deepest iteration that
//! finished before the deadline.
//!
//! ## Scores
//!
//! Leaves use the heuristic. Decided positions use sentinels that dominate
//! any heuristic value: [`WIN_SCORE`], [`LOSS_SCORE`], and [`STALLED_SCORE`]
//! for a side with nothing to play.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{Move, NodeId, Piece, Ticket};
use crate::rules::{Outcome, SearchState, StateError};

use super::combinator::{pursuer_combinations, Combination};
use super::config::SearchConfig;
use super::heuristic::evaluate;
use super::stats::SearchStats;

/// The fugitive has won.
pub const WIN_SCORE: i64 = 2_000_000;

/// The pursuers have won.
pub const LOSS_SCORE: i64 = -2_000_000;

/// The side to move has nothing to play.
pub const STALLED_SCORE: i64 = 0;

/// The deadline passed mid-iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("search deadline reached")]
pub struct Aborted;

/// Reasons no move could be chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    #[display("the fugitive has no legal moves")]
    NoLegalMoves,
    #[display("it is not the fugitive's turn")]
    NotFugitiveTurn,
    #[display("board does not report {piece}")]
    IncompleteBoard { piece: Piece },
    #[display("board does not form a valid state: {_0}")]
    InvalidBoard(StateError),
}

impl From<StateError> for SearchError {
    fn from(err: StateError) -> Self {
        SearchError::InvalidBoard(err)
    }
}

/// Fugitive moves worth exploring, in legal-move order.
///
/// Keeps the first move to each destination. A move is only kept (and its
/// destination only claimed) if the fugitive can pay its secret tickets.
fn fugitive_candidates(state: &SearchState) -> Vec<Move> {
    let fugitive = state.fugitive();
    let mut seen: Vec<NodeId> = Vec::new();
    let mut candidates = Vec::new();

    for mv in state.moves().iter().filter(|m| m.piece().is_fugitive()) {
        let destination = mv.destination();
        if seen.contains(&destination) {
            continue;
        }
        let secrets = mv.secret_count();
        if secrets > 0 && !fugitive.has_at_least(Ticket::Secret, secrets) {
            continue;
        }
        seen.push(destination);
        candidates.push(*mv);
    }
    candidates
}

/// Minimax search context.
///
/// Owns its configuration and the statistics of the last search.
pub struct MinimaxSearch {
    config: SearchConfig,
    deadline: Option<Instant>,
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            deadline: None,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Choose a fugitive move.
    ///
    /// With a deadline, the search returns the result of the deepest
    /// finished iteration, or the first candidate if none finished.
    pub fn search(
        &mut self,
        state: &SearchState,
        deadline: Option<Instant>,
    ) -> Result<Move, SearchError> {
        let start = Instant::now();
        self.stats.reset();
        self.deadline = deadline;

        if state.moves().is_empty() {
            return Err(SearchError::NoLegalMoves);
        }
        if !state.is_fugitive_turn() {
            return Err(SearchError::NotFugitiveTurn);
        }

        let candidates = fugitive_candidates(state);
        let Some(&first) = candidates.first() else {
            return Err(SearchError::NoLegalMoves);
        };

        let mut best = first;
        let max_depth = self.config.max_depth;
        for depth in max_depth.min(1)..=max_depth {
            match self.root(state, &candidates, depth) {
                Ok((mv, score)) => {
                    best = mv;
                    self.stats.completed_depth = depth;
                    trace!(depth, score, mv = %mv, "iteration complete");
                    if score == WIN_SCORE {
                        break;
                    }
                }
                Err(Aborted) => {
                    debug!(depth, "deadline reached");
                    break;
                }
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            mv = %best,
            depth = self.stats.completed_depth,
            nodes = self.stats.nodes,
            "fugitive move chosen"
        );
        Ok(best)
    }

    fn root(
        &mut self,
        state: &SearchState,
        candidates: &[Move],
        depth: u32,
    ) -> Result<(Move, i64), Aborted> {
        let mut alpha = i64::MIN;
        let mut best = (candidates[0], i64::MIN);

        for &mv in candidates {
            let Ok(next) = state.advance(&mv) else { continue };
            if next.winners().contains(&Piece::Fugitive) {
                return Ok((mv, WIN_SCORE));
            }
            let eval = self.min_node(&next, depth, alpha, i64::MAX)?;
            if eval == WIN_SCORE {
                return Ok((mv, eval));
            }
            if eval > alpha {
                alpha = eval;
                best = (mv, eval);
            }
        }
        Ok(best)
    }

    fn max_node(
        &mut self,
        state: &SearchState,
        depth: u32,
        mut alpha: i64,
        beta: i64,
    ) -> Result<i64, Aborted> {
        self.visit()?;
        if state.is_terminal() {
            return Ok(terminal_score(state));
        }
        if depth == 0 {
            return Ok(self.leaf(state));
        }

        let candidates = fugitive_candidates(state);
        if candidates.is_empty() {
            return Ok(STALLED_SCORE);
        }

        let mut best = i64::MIN;
        for mv in candidates {
            let Ok(next) = state.advance(&mv) else { continue };
            if next.winners().contains(&Piece::Fugitive) {
                return Ok(WIN_SCORE);
            }
            let eval = self.min_node(&next, depth - 1, alpha, beta)?;
            best = best.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                return Ok(best);
            }
        }
        Ok(best)
    }

    fn min_node(
        &mut self,
        state: &SearchState,
        depth: u32,
        alpha: i64,
        mut beta: i64,
    ) -> Result<i64, Aborted> {
        self.visit()?;
        if state.is_terminal() {
            return Ok(terminal_score(state));
        }
        if depth == 0 {
            return Ok(self.leaf(state));
        }

        let combinations = pursuer_combinations(state);
        if combinations.is_empty() {
            return Ok(STALLED_SCORE);
        }
        self.min_over(state, &combinations, depth, alpha, beta)
    }

    /// Score the MIN ply over the given joint moves. `depth` is at least one.
    fn min_over(
        &mut self,
        state: &SearchState,
        combinations: &[Combination],
        depth: u32,
        alpha: i64,
        mut beta: i64,
    ) -> Result<i64, Aborted> {
        let mut best = i64::MAX;
        for combination in combinations {
            let Some(next) = play_combination(state, combination) else { continue };
            if Outcome::of(next.winners()) == Outcome::PursuersWin {
                return Ok(LOSS_SCORE);
            }

            let eval = self.max_node(&next, depth - 1, alpha, beta)?;
            best = best.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                return Ok(best);
            }
        }

        if best == i64::MAX {
            return Ok(STALLED_SCORE);
        }
        Ok(best)
    }

    fn leaf(&mut self, state: &SearchState) -> i64 {
        self.stats.leaf_evals += 1;
        let fugitive = state.fugitive();
        evaluate(
            state.setup().graph(),
            fugitive.location(),
            fugitive.tickets()[Ticket::Double],
            &state.pursuer_locations(),
            &self.config.weights,
        )
    }

    fn visit(&mut self) -> Result<(), Aborted> {
        self.stats.nodes += 1;
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(Aborted),
            _ => Ok(()),
        }
    }
}

/// Play a joint pursuer move, stopping as soon as the game is decided.
///
/// `None` when a move is no longer legal by the time its pursuer's turn
/// comes.
fn play_combination(state: &SearchState, combination: &[Move]) -> Option<SearchState> {
    let mut next = state.clone();
    for mv in combination {
        next = next.advance(mv).ok()?;
        if next.is_terminal() {
            return Some(next);
        }
    }
    Some(next.skip_pending_pursuers())
}

fn terminal_score(state: &SearchState) -> i64 {
    match Outcome::of(state.winners()) {
        Outcome::FugitiveWins => WIN_SCORE,
        Outcome::PursuersWin => LOSS_SCORE,
        Outcome::Ongoing => STALLED_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use smallvec::smallvec;

    use super::*;
    use crate::core::{Player, Setup, SingleMove, Tickets, Transport};
    use crate::graph::Graph;

    fn line(nodes: u32) -> Graph {
        Graph::from_edges((1..nodes).map(|n| (n, n + 1, Transport::Taxi)))
    }

    fn state(graph: Graph, rounds: usize, fugitive: Player, pursuers: &[u32]) -> SearchState {
        let setup = Arc::new(Setup::new(graph, vec![false; rounds]).unwrap());
        SearchState::new(
            setup,
            fugitive,
            pursuers.iter().enumerate().map(|(i, &at)| {
                Player::pursuer(i as u8, Tickets::pursuer_default(), NodeId(at))
            }),
        )
        .unwrap()
    }

    fn taxi(from: u32, to: u32) -> Move {
        Move::Single(SingleMove::new(Piece::Fugitive, NodeId(from), Ticket::Taxi, NodeId(to)))
    }

    fn pursuer_taxi(index: u8, from: u32, to: u32) -> Move {
        Move::Single(SingleMove::new(
            Piece::pursuer(index),
            NodeId(from),
            Ticket::Taxi,
            NodeId(to),
        ))
    }

    /// Pursuers' half of round one on 1 - ... - 8 after the fugitive's 1 -> 2,
    /// pursuers at 5 and 7.
    fn two_pursuers_to_move() -> SearchState {
        let fugitive = Player::fugitive(Tickets::empty().with(Ticket::Taxi, 4), NodeId(1));
        state(line(8), 10, fugitive, &[5, 7]).advance(&taxi(1, 2)).unwrap()
    }

    #[test]
    fn test_candidates_deduplicated_by_destination() {
        let fugitive = Player::fugitive(
            Tickets::empty().with(Ticket::Taxi, 2).with(Ticket::Secret, 1),
            NodeId(1),
        );
        let state = state(line(5), 5, fugitive, &[5]);

        assert_eq!(state.moves().len(), 2);
        assert_eq!(fugitive_candidates(&state), vec![taxi(1, 2)]);
    }

    #[test]
    fn test_avoids_stepping_next_to_pursuer() {
        // 1 - 2 - 3 - 4 - 5 - 6, pursuer at 5
        let fugitive = Player::fugitive(Tickets::fugitive_default(), NodeId(3));
        let mut search = MinimaxSearch::new(SearchConfig::default());
        let state = state(line(6), 10, fugitive, &[5]);

        let chosen = search.search(&state, None).unwrap();
        assert_eq!(chosen.destination(), NodeId(2));
        assert_eq!(search.stats().completed_depth, 2);
        assert!(search.stats().nodes > 0);
    }

    #[test]
    fn test_round_limit_scores_as_win() {
        // One round left: any move the pursuer cannot punish wins.
        let fugitive = Player::fugitive(Tickets::empty().with(Ticket::Taxi, 1), NodeId(1));
        let state = state(line(5), 1, fugitive, &[5]);
        let mut search = MinimaxSearch::new(SearchConfig::default().with_max_depth(4));

        let next = state.advance(&taxi(1, 2)).unwrap();
        assert_eq!(search.min_node(&next, 2, i64::MIN, i64::MAX), Ok(WIN_SCORE));
        assert_eq!(search.search(&state, None), Ok(taxi(1, 2)));
    }

    #[test]
    fn test_capture_scores_as_loss() {
        // Fugitive at 1 must step to 2, next to the pursuer at 3.
        let fugitive = Player::fugitive(Tickets::empty().with(Ticket::Taxi, 3), NodeId(1));
        let state = state(line(3), 5, fugitive, &[3]);
        let mut search = MinimaxSearch::new(SearchConfig::default());

        let next = state.advance(&taxi(1, 2)).unwrap();
        assert_eq!(search.min_node(&next, 2, i64::MIN, i64::MAX), Ok(LOSS_SCORE));
    }

    #[test]
    fn test_expired_deadline_returns_first_candidate() {
        let fugitive = Player::fugitive(Tickets::fugitive_default(), NodeId(3));
        let state = state(line(6), 10, fugitive, &[5]);
        let mut search = MinimaxSearch::new(SearchConfig::default());

        let chosen = search.search(&state, Some(Instant::now())).unwrap();
        assert_eq!(chosen, fugitive_candidates(&state)[0]);
        assert_eq!(search.stats().completed_depth, 0);
    }

    #[test]
    fn test_search_errors() {
        let fugitive = Player::fugitive(Tickets::empty().with(Ticket::Taxi, 3), NodeId(1));
        let state = state(line(5), 5, fugitive, &[5]);
        let mut search = MinimaxSearch::new(SearchConfig::default());

        let pursuers_turn = state.advance(&taxi(1, 2)).unwrap();
        assert_eq!(
            search.search(&pursuers_turn, None),
            Err(SearchError::NotFugitiveTurn)
        );

        let stuck = Player::fugitive(Tickets::empty(), NodeId(1));
        let over = self::state(line(5), 5, stuck, &[5]);
        assert!(over.is_terminal());
        assert_eq!(search.search(&over, None), Err(SearchError::NoLegalMoves));
    }

    #[test]
    fn test_depth_zero_uses_heuristic_only() {
        let fugitive = Player::fugitive(Tickets::fugitive_default(), NodeId(3));
        let state = state(line(6), 10, fugitive, &[5]);
        let mut search = MinimaxSearch::new(SearchConfig::default().with_max_depth(0));

        // Without lookahead the double back to 1 looks safest.
        let chosen = search.search(&state, None).unwrap();
        assert!(chosen.is_double());
        assert_eq!(chosen.destination(), NodeId(1));
        assert_eq!(search.stats().leaf_evals, search.stats().nodes);
    }

    #[test]
    fn test_stale_combination_skipped() {
        let state = two_pursuers_to_move();
        let mut search = MinimaxSearch::new(SearchConfig::default());
        // Pursuer 1 cannot follow pursuer 0 onto 6.
        let stale: Combination = smallvec![pursuer_taxi(0, 5, 6), pursuer_taxi(1, 7, 6)];
        let fine: Combination = smallvec![pursuer_taxi(0, 5, 4), pursuer_taxi(1, 7, 8)];

        assert!(play_combination(&state, &stale).is_none());
        let alone = search.min_over(&state, &[fine.clone()], 1, i64::MIN, i64::MAX);
        assert_eq!(
            search.min_over(&state, &[stale, fine], 1, i64::MIN, i64::MAX),
            alone
        );
        assert_ne!(alone, Ok(STALLED_SCORE));
    }

    #[test]
    fn test_all_stale_combinations_score_stalled() {
        let state = two_pursuers_to_move();
        let mut search = MinimaxSearch::new(SearchConfig::default());
        let stale: Combination = smallvec![pursuer_taxi(0, 5, 6), pursuer_taxi(1, 7, 6)];

        assert_eq!(
            search.min_over(&state, &[stale], 1, i64::MIN, i64::MAX),
            Ok(STALLED_SCORE)
        );
    }

    #[test]
    fn test_fugitive_win_stops_combination() {
        // The lone pursuer spends its last ticket, which decides the game;
        // the trailing move is never tried.
        let setup = Arc::new(Setup::new(line(6), vec![false; 10]).unwrap());
        let state = SearchState::new(
            setup,
            Player::fugitive(Tickets::empty().with(Ticket::Taxi, 2), NodeId(1)),
            [Player::pursuer(0, Tickets::empty().with(Ticket::Taxi, 1), NodeId(5))],
        )
        .unwrap()
        .advance(&taxi(1, 2))
        .unwrap();
        let combination: Combination = smallvec![pursuer_taxi(0, 5, 4), pursuer_taxi(0, 4, 3)];

        let next = play_combination(&state, &combination).unwrap();
        assert_eq!(next.winners().as_slice(), &[Piece::Fugitive]);
        assert_eq!(next.pursuer_locations().as_slice(), &[NodeId(4)]);

        let mut search = MinimaxSearch::new(SearchConfig::default());
        assert_eq!(
            search.min_over(&state, &[combination], 1, i64::MIN, i64::MAX),
            Ok(WIN_SCORE)
        );
    }
}
