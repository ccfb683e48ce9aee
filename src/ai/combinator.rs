//! Joint pursuer moves for one search ply.
//!
//! From the fugitive's side the pursuers move together, so a MIN ply is a
//! combination of one move per pursuer. The full cross product explodes
//! quickly; this prunes it by distance to the fugitive:
//!
//! - moves whose destination is no farther from the fugitive than the source
//!   are *approaching*, the rest *retreating*
//! - approaching moves are kept; a lone approaching move is paired with the
//!   first retreating one; with none approaching, up to two retreats are kept
//! - a pursuer left with a single retreat that an earlier pursuer already
//!   targets sits this ply out
//!
//! Moves are deduplicated by destination within a pursuer, and combinations
//! that send two pursuers to the same node are skipped.

use smallvec::SmallVec;

use crate::core::{Move, NodeId, Player};
use crate::graph::DistanceMap;
use crate::rules::{State, TravelLog};

/// One joint pursuer move, in pursuer order.
pub type Combination = SmallVec<[Move; 5]>;

type Options = SmallVec<[Move; 4]>;

/// Enumerate pruned joint moves for the pursuers still owed a move.
///
/// Empty when it is the fugitive's turn or no pursuer has a usable move.
#[must_use]
pub fn pursuer_combinations<L: TravelLog>(state: &State<L>) -> Vec<Combination> {
    let graph = state.setup().graph();
    let map = DistanceMap::from_source(graph, state.fugitive().location());
    // Unreachable counts as infinitely far.
    let reach = |node: NodeId| map.get(node, graph).unwrap_or(u32::MAX);

    let mut options: SmallVec<[Options; 5]> = SmallVec::new();
    let mut claimed: SmallVec<[NodeId; 10]> = SmallVec::new();

    for pursuer in state
        .pursuers()
        .iter()
        .filter(|p| state.remaining().contains(&p.piece()))
    {
        let (selected, fallback) = select(state.moves(), pursuer, &reach);
        match selected.as_slice() {
            [] => continue,
            [only] if fallback && claimed.contains(&only.destination()) => continue,
            _ => {}
        }
        claimed.extend(selected.iter().map(Move::destination));
        options.push(selected);
    }

    if options.is_empty() {
        return Vec::new();
    }
    cross(&options)
}

/// Pick the candidate moves for one pursuer. The flag is set when nothing
/// approaches and the options are retreats only.
fn select(moves: &[Move], pursuer: &Player, reach: &impl Fn(NodeId) -> u32) -> (Options, bool) {
    let mut seen: SmallVec<[NodeId; 8]> = SmallVec::new();
    let mut approaching = Options::new();
    let mut retreating = Options::new();

    for mv in moves.iter().filter(|m| m.piece() == pursuer.piece()) {
        let Move::Single(single) = mv else { continue };
        if seen.contains(&single.destination) {
            continue;
        }
        seen.push(single.destination);
        if reach(single.destination) <= reach(single.source) {
            approaching.push(*mv);
        } else {
            retreating.push(*mv);
        }
    }

    match approaching.len() {
        0 => {
            retreating.truncate(2);
            return (retreating, true);
        }
        1 => retreating.truncate(1),
        _ => retreating.clear(),
    }
    approaching.extend(retreating);
    (approaching, false)
}

/// Cross product of per-pursuer options, skipping shared destinations.
fn cross(options: &[Options]) -> Vec<Combination> {
    let mut combos = vec![Combination::new()];
    for opts in options {
        let mut next = Vec::with_capacity(combos.len() * opts.len());
        for combo in &combos {
            for mv in opts {
                if combo.iter().any(|m| m.destination() == mv.destination()) {
                    continue;
                }
                let mut extended = combo.clone();
                extended.push(*mv);
                next.push(extended);
            }
        }
        combos = next;
    }
    combos
}
