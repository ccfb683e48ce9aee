//! Legal move generation.
//!
//! Moves never end on a node occupied by a pursuer. A leg may be paid with
//! the edge's own transport ticket or, independently, with a secret ticket.
//! Ticket options for a leg are deduplicated, so a ferry edge (which already
//! needs a secret) does not yield the same secret move twice.

use smallvec::SmallVec;

use crate::core::{DoubleMove, NodeId, Player, Setup, SingleMove, Ticket};
use crate::graph::Edge;

/// Locations held by pursuers. Games rarely have more than a handful.
pub type Occupied = SmallVec<[NodeId; 8]>;

/// Tickets the player could pay a leg along `edge` with.
fn leg_tickets(edge: &Edge, player: &Player) -> SmallVec<[Ticket; 4]> {
    let mut options = SmallVec::new();
    for ticket in edge.transports.iter().map(|t| t.required_ticket()) {
        if player.has(ticket) && !options.contains(&ticket) {
            options.push(ticket);
        }
    }
    if player.has(Ticket::Secret) && !options.contains(&Ticket::Secret) {
        options.push(Ticket::Secret);
    }
    options
}

/// All single moves for `player` starting at `source`.
#[must_use]
pub fn single_moves(
    setup: &Setup,
    occupied: &[NodeId],
    player: &Player,
    source: NodeId,
) -> Vec<SingleMove> {
    let mut moves = Vec::new();
    for edge in setup.graph().edges(source) {
        if occupied.contains(&edge.to) {
            continue;
        }
        for ticket in leg_tickets(edge, player) {
            moves.push(SingleMove::new(player.piece(), source, ticket, edge.to));
        }
    }
    moves
}

/// Whether `player` has at least one single move from its location.
///
/// Same rules as [`single_moves`] without building the list.
#[must_use]
pub fn has_single_move(setup: &Setup, occupied: &[NodeId], player: &Player) -> bool {
    let secret = player.has(Ticket::Secret);
    setup.graph().edges(player.location()).iter().any(|edge| {
        !occupied.contains(&edge.to)
            && (secret
                || edge
                    .transports
                    .iter()
                    .any(|t| player.has(t.required_ticket())))
    })
}

/// All double moves for `player` starting at `source`.
///
/// Requires a double ticket and at least two unplayed rounds. When both legs
/// use the same ticket kind the player must hold two of it.
#[must_use]
pub fn double_moves(
    setup: &Setup,
    occupied: &[NodeId],
    player: &Player,
    source: NodeId,
    rounds_used: usize,
) -> Vec<DoubleMove> {
    let mut moves = Vec::new();
    if !player.has(Ticket::Double) || setup.round_count().saturating_sub(rounds_used) < 2 {
        return moves;
    }

    let graph = setup.graph();
    for first in graph.edges(source) {
        if occupied.contains(&first.to) {
            continue;
        }
        for ticket1 in leg_tickets(first, player) {
            for second in graph.edges(first.to) {
                if occupied.contains(&second.to) {
                    continue;
                }
                for ticket2 in leg_tickets(second, player) {
                    if ticket1 == ticket2 && !player.has_at_least(ticket1, 2) {
                        continue;
                    }
                    moves.push(DoubleMove::new(
                        player.piece(),
                        source,
                        ticket1,
                        first.to,
                        ticket2,
                        second.to,
                    ));
                }
            }
        }
    }
    moves
}
