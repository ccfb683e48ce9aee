//! Agent-versus-agent match loop.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::ai::Agent;
use crate::core::Piece;
use crate::rules::Outcome;

use super::model::Model;

/// Match loop parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Time each agent gets per move.
    pub move_budget: Duration,

    /// Stop after this many moves even if the game is still going.
    pub max_moves: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            move_budget: Duration::from_secs(1),
            max_moves: 1000,
        }
    }
}

impl MatchConfig {
    /// Set the per-move time budget.
    #[must_use]
    pub fn with_move_budget(mut self, budget: Duration) -> Self {
        self.move_budget = budget;
        self
    }

    /// Set the move cap.
    #[must_use]
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }
}

/// How a match ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    /// Winning pieces from the final state; empty on forfeit or truncation.
    pub winners: Vec<Piece>,

    /// Result, counting a forfeit as a loss for the side that forfeited.
    pub outcome: Outcome,

    /// Moves applied to the model.
    pub moves_played: usize,

    /// Side that failed to produce a legal move, if any. `Piece::Fugitive`
    /// for the fugitive, otherwise the first pursuer owed a move.
    pub forfeit: Option<Piece>,
}

/// Drive `model` until the game ends, a side forfeits, or the move cap.
pub fn run_match(
    model: &mut Model,
    fugitive: &mut dyn Agent,
    pursuers: &mut dyn Agent,
    config: &MatchConfig,
) -> MatchReport {
    info!(fugitive = fugitive.name(), pursuers = pursuers.name(), "match started");

    let mut moves_played = 0;
    let mut forfeit = None;

    while moves_played < config.max_moves && !model.current_board().is_terminal() {
        let board = model.current_board();
        let fugitive_turn = board.is_fugitive_turn();
        let side = if fugitive_turn {
            Piece::Fugitive
        } else {
            board
                .remaining()
                .iter()
                .next()
                .copied()
                .unwrap_or(Piece::Fugitive)
        };
        let agent: &mut dyn Agent = if fugitive_turn {
            &mut *fugitive
        } else {
            &mut *pursuers
        };

        let chosen = match agent.choose_move(board, config.move_budget) {
            Ok(mv) if mv.piece().is_fugitive() == fugitive_turn => mv,
            Ok(mv) => {
                warn!(agent = agent.name(), mv = %mv, "agent moved the wrong side");
                forfeit = Some(side);
                break;
            }
            Err(err) => {
                warn!(agent = agent.name(), error = %err, "agent produced no move");
                forfeit = Some(side);
                break;
            }
        };

        if model.choose_move(&chosen).is_err() {
            forfeit = Some(side);
            break;
        }
        moves_played += 1;
    }

    let state = model.current_board();
    let winners: Vec<Piece> = state.winners().iter().copied().collect();
    let outcome = match forfeit {
        Some(Piece::Fugitive) => Outcome::PursuersWin,
        Some(Piece::Pursuer(_)) => Outcome::FugitiveWins,
        None => Outcome::of(&winners),
    };

    info!(?outcome, moves_played, "match finished");
    MatchReport {
        winners,
        outcome,
        moves_played,
        forfeit,
    }
}
