//! Terminal-condition evaluation.
//!
//! Checked in order, first match decides:
//! 1. A pursuer stands on the fugitive: pursuers win.
//! 2. No pursuer can move: the fugitive wins.
//! 3. The fugitive cannot move and is either hemmed in by an adjacent
//!    pursuer or due to move: pursuers win.
//! 4. The schedule is used up and the fugitive is due to move: fugitive wins.

use im::{OrdSet, Vector};
use smallvec::SmallVec;

use crate::core::{NodeId, Piece, Player, Setup};

use super::movegen::{double_moves, has_single_move};

/// Winning pieces. Empty while the game is ongoing.
pub type Winners = SmallVec<[Piece; 6]>;

/// Outcome of a position, for callers that only care who won.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    FugitiveWins,
    PursuersWin,
}

impl Outcome {
    /// Classify a winner set.
    #[must_use]
    pub fn of(winners: &[Piece]) -> Self {
        match winners.first() {
            None => Outcome::Ongoing,
            Some(Piece::Fugitive) => Outcome::FugitiveWins,
            Some(Piece::Pursuer(_)) => Outcome::PursuersWin,
        }
    }
}

/// Evaluate the win rules for a position.
#[must_use]
pub fn winners(
    setup: &Setup,
    fugitive: &Player,
    pursuers: &Vector<Player>,
    occupied: &[NodeId],
    remaining: &OrdSet<Piece>,
    rounds_used: usize,
) -> Winners {
    let all_pursuers = || pursuers.iter().map(Player::piece).collect::<Winners>();
    let fugitive_turn = remaining.contains(&Piece::Fugitive);

    if pursuers.iter().any(|p| p.location() == fugitive.location()) {
        return all_pursuers();
    }

    if pursuers
        .iter()
        .all(|p| !has_single_move(setup, occupied, p))
    {
        return Winners::from_elem(Piece::Fugitive, 1);
    }

    let fugitive_stuck = !has_single_move(setup, occupied, fugitive)
        && double_moves(setup, occupied, fugitive, fugitive.location(), rounds_used).is_empty();
    if fugitive_stuck {
        let cornered = setup
            .graph()
            .adjacent_nodes(fugitive.location())
            .any(|n| occupied.contains(&n));
        if cornered || fugitive_turn {
            return all_pursuers();
        }
    }

    if rounds_used == setup.round_count() && fugitive_turn {
        return Winners::from_elem(Piece::Fugitive, 1);
    }

    Winners::new()
}
