//! Rules integration tests: full turns through the state machine.

mod common;

use rust_pursuit::core::{
    DoubleMove, LogEntry, Move, NodeId, Piece, Player, Setup, SingleMove, Ticket, Tickets,
};
use rust_pursuit::rules::{AdvanceError, Board, GameState, Outcome};

use common::{grid_game, grid_graph, line_graph, setup};

fn single(piece: Piece, from: u32, ticket: Ticket, to: u32) -> Move {
    Move::Single(SingleMove::new(piece, NodeId(from), ticket, NodeId(to)))
}

fn total_tickets(state: &GameState) -> u32 {
    state.fugitive().tickets().total()
        + state
            .pursuers()
            .iter()
            .map(|p| p.tickets().total())
            .sum::<u32>()
}

// =============================================================================
// Whole-Game Scenarios
// =============================================================================

#[test]
fn test_capture_on_three_node_line() {
    // A - B - C, one revealed round, fugitive at A, pursuer at C.
    let taxis = Tickets::empty().with(Ticket::Taxi, 2);
    let state = GameState::new(
        setup(line_graph(3), vec![true]),
        Player::fugitive(taxis, NodeId(1)),
        [Player::pursuer(0, taxis, NodeId(3))],
    )
    .unwrap();

    let state = state
        .advance(&single(Piece::Fugitive, 1, Ticket::Taxi, 2))
        .unwrap();
    assert_eq!(
        state.travel_log().iter().copied().collect::<Vec<_>>(),
        vec![LogEntry::reveal(Ticket::Taxi, NodeId(2))]
    );

    let state = state
        .advance(&single(Piece::pursuer(0), 3, Ticket::Taxi, 2))
        .unwrap();
    assert_eq!(state.winners().as_slice(), &[Piece::pursuer(0)]);
    assert!(state.moves().is_empty());
    assert_eq!(Outcome::of(state.winners()), Outcome::PursuersWin);
}

#[test]
fn test_single_ticket_fugitive_cornered_on_arrival() {
    // Same line with one taxi each: once at B the fugitive is out of tickets
    // next to the pursuer, so the game ends before the pursuer moves.
    let taxi = Tickets::empty().with(Ticket::Taxi, 1);
    let state = GameState::new(
        setup(line_graph(3), vec![true]),
        Player::fugitive(taxi, NodeId(1)),
        [Player::pursuer(0, taxi, NodeId(3))],
    )
    .unwrap();

    let state = state
        .advance(&single(Piece::Fugitive, 1, Ticket::Taxi, 2))
        .unwrap();

    assert_eq!(
        state.travel_log().iter().copied().collect::<Vec<_>>(),
        vec![LogEntry::reveal(Ticket::Taxi, NodeId(2))]
    );
    assert_eq!(state.winners().as_slice(), &[Piece::pursuer(0)]);
    assert!(state.moves().is_empty());
    assert_eq!(state.pursuer_locations().as_slice(), &[NodeId(3)]);
}

#[test]
fn test_fugitive_survives_round_limit() {
    // 1 - 2 - 3 - 4 - 5 - 6 - 7, two rounds, pursuer far away at 7.
    let state = GameState::new(
        setup(line_graph(7), vec![false, false]),
        Player::fugitive(Tickets::empty().with(Ticket::Taxi, 2), NodeId(1)),
        [Player::pursuer(0, Tickets::pursuer_default(), NodeId(7))],
    )
    .unwrap();

    let state = state
        .advance(&single(Piece::Fugitive, 1, Ticket::Taxi, 2))
        .unwrap()
        .advance(&single(Piece::pursuer(0), 7, Ticket::Taxi, 6))
        .unwrap()
        .advance(&single(Piece::Fugitive, 2, Ticket::Taxi, 1))
        .unwrap();
    assert!(!state.is_terminal(), "pursuers still owe a move");

    let state = state
        .advance(&single(Piece::pursuer(0), 6, Ticket::Taxi, 5))
        .unwrap();
    assert_eq!(state.winners().as_slice(), &[Piece::Fugitive]);
    assert_eq!(state.rounds_used(), 2);
}

#[test]
fn test_trapped_fugitive_loses_on_its_turn() {
    // Fugitive at a dead end with no tickets left for the only edge.
    let state = GameState::new(
        setup(line_graph(4), vec![false; 4]),
        Player::fugitive(Tickets::empty().with(Ticket::Bus, 3), NodeId(1)),
        [Player::pursuer(0, Tickets::pursuer_default(), NodeId(4))],
    )
    .unwrap();

    assert_eq!(state.winners().as_slice(), &[Piece::pursuer(0)]);
}

// =============================================================================
// Tickets and Log
// =============================================================================

#[test]
fn test_pursuer_tickets_are_handed_to_fugitive() {
    let state = grid_game(6, &[1, 12]);
    let before = total_tickets(&state);

    let state = state
        .advance(&single(Piece::Fugitive, 6, Ticket::Taxi, 7))
        .unwrap();
    // The fugitive's ticket leaves play.
    assert_eq!(total_tickets(&state), before - 1);

    let fugitive_bus = state.fugitive().tickets()[Ticket::Bus];
    let state = state
        .advance(&single(Piece::pursuer(0), 1, Ticket::Bus, 3))
        .unwrap();
    assert_eq!(total_tickets(&state), before - 1);
    assert_eq!(state.fugitive().tickets()[Ticket::Bus], fugitive_bus + 1);
    assert_eq!(
        state.tickets(Piece::pursuer(0)).unwrap()[Ticket::Bus],
        Tickets::pursuer_default()[Ticket::Bus] - 1
    );
}

#[test]
fn test_standard_schedule_reveals_third_leg() {
    let mut state = grid_game(6, &[4]);
    let route = [(6, 7), (7, 6), (6, 7)];
    let mut pursuer_at = 4;

    for (from, to) in route {
        state = state
            .advance(&single(Piece::Fugitive, from, Ticket::Taxi, to))
            .unwrap();
        // Pursuer shuffles between 4 and 8, away from the fugitive's path.
        let next = if pursuer_at == 4 { 8 } else { 4 };
        state = state
            .advance(&single(Piece::pursuer(0), pursuer_at, Ticket::Taxi, next))
            .unwrap();
        pursuer_at = next;
    }

    let log: Vec<LogEntry> = state.travel_log().iter().copied().collect();
    assert_eq!(
        log,
        vec![
            LogEntry::hidden(Ticket::Taxi),
            LogEntry::hidden(Ticket::Taxi),
            LogEntry::reveal(Ticket::Taxi, NodeId(7)),
        ]
    );
}

#[test]
fn test_ferry_needs_secret_ticket() {
    let state = grid_game(4, &[12]);
    let ferry_moves: Vec<&Move> = state
        .moves()
        .iter()
        .filter(|m| m.destination() == NodeId(9) && !m.is_double())
        .collect();

    assert_eq!(
        ferry_moves,
        vec![&single(Piece::Fugitive, 4, Ticket::Secret, 9)]
    );
}

#[test]
fn test_double_move_logs_two_entries() {
    let state = grid_game(6, &[4]);
    let mv = Move::Double(DoubleMove::new(
        Piece::Fugitive,
        NodeId(6),
        Ticket::Taxi,
        NodeId(7),
        Ticket::Secret,
        NodeId(11),
    ));
    assert!(state.moves().contains(&mv));

    let next = state.advance(&mv).unwrap();
    assert_eq!(next.rounds_used(), 2);
    assert_eq!(next.fugitive().location(), NodeId(11));
    assert_eq!(next.fugitive().tickets()[Ticket::Double], 1);
    assert_eq!(next.fugitive().tickets()[Ticket::Secret], 4);
    assert!(!next.is_fugitive_turn());
}

#[test]
fn test_no_double_moves_in_last_round() {
    let state = GameState::new(
        setup(grid_graph(), vec![false]),
        Player::fugitive(Tickets::fugitive_default(), NodeId(6)),
        [Player::pursuer(0, Tickets::pursuer_default(), NodeId(4))],
    )
    .unwrap();

    assert!(!state.moves().is_empty());
    assert!(state.moves().iter().all(|m| !m.is_double()));
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_illegal_moves_rejected() {
    let state = grid_game(6, &[4]);

    // Pursuer moving out of turn.
    let early = single(Piece::pursuer(0), 4, Ticket::Taxi, 3);
    assert_eq!(
        state.advance(&early).unwrap_err(),
        AdvanceError::IllegalMove { mv: early }
    );

    // Non-adjacent hop.
    let jump = single(Piece::Fugitive, 6, Ticket::Taxi, 12);
    assert!(state.advance(&jump).is_err());
    assert_eq!(state.fugitive().location(), NodeId(6));
}

#[test]
fn test_pursuer_cannot_enter_pursuer_node() {
    let state = grid_game(1, &[6, 7]);
    let state = state
        .advance(&single(Piece::Fugitive, 1, Ticket::Taxi, 2))
        .unwrap();

    assert!(!state
        .moves()
        .contains(&single(Piece::pursuer(0), 6, Ticket::Taxi, 7)));
    assert!(state
        .moves()
        .contains(&single(Piece::pursuer(0), 6, Ticket::Taxi, 2)));
}

#[test]
fn test_setup_rejects_empty_schedule() {
    assert!(Setup::new(grid_graph(), Vec::new()).is_err());
}
