//! Move, build, and win rules on reference positions.

use santorini_engine::core::{Board, Construction, Move, Player, Position, Worker, WorkerSet};
use santorini_engine::rules::{
    candidate_builds, candidate_moves, is_legal_build, is_legal_move, is_winning_move,
    neighbors_and_self,
};

fn reference_board() -> Board {
    Board::from_rows([
        [1, 1, 2, 4, 3],
        [4, 2, 0, 0, 4],
        [4, 2, 1, 2, 4],
        [0, 4, 1, 0, 0],
        [3, 4, 0, 0, 1],
    ])
    .unwrap()
}

fn reference_workers() -> WorkerSet {
    WorkerSet::new(
        [Position::new(3, 1), Position::new(0, 0)],
        [Position::new(3, 2), Position::new(4, 4)],
    )
    .unwrap()
}

fn a0(col: u8, row: u8) -> Move {
    Move::new(Player::A, Worker::First, Position::new(col, row))
}

// =============================================================================
// Move Validity
// =============================================================================

#[test]
fn test_move_must_be_adjacent() {
    assert!(!is_legal_move(&a0(3, 4), &reference_workers(), &reference_board()));
}

#[test]
fn test_move_cannot_stay_in_place() {
    assert!(!is_legal_move(&a0(3, 1), &reference_workers(), &reference_board()));
}

#[test]
fn test_move_cannot_land_on_worker() {
    assert!(!is_legal_move(&a0(3, 2), &reference_workers(), &reference_board()));
}

#[test]
fn test_move_cannot_land_on_capped() {
    assert!(!is_legal_move(&a0(3, 0), &reference_workers(), &reference_board()));
}

#[test]
fn test_move_cannot_climb_two_levels() {
    assert!(!is_legal_move(&a0(2, 0), &reference_workers(), &reference_board()));
}

#[test]
fn test_move_can_descend_two_levels() {
    let workers = WorkerSet::new(
        [Position::new(2, 0), Position::new(0, 0)],
        [Position::new(3, 2), Position::new(4, 4)],
    )
    .unwrap();
    assert!(is_legal_move(&a0(2, 1), &workers, &reference_board()));
}

// =============================================================================
// Move Generation
// =============================================================================

#[test]
fn test_generate_moves_reference() {
    let board = reference_board();
    let workers = reference_workers();

    let second = candidate_moves(Player::A, Worker::Second, &workers, &board);
    assert_eq!(second.as_slice(), &[Position::new(1, 0), Position::new(1, 1)]);

    let first = candidate_moves(Player::A, Worker::First, &workers, &board);
    assert_eq!(first.as_slice(), &[Position::new(2, 1), Position::new(2, 2)]);
}

#[test]
fn test_generate_moves_flat_board() {
    let moves = candidate_moves(Player::A, Worker::First, &reference_workers(), &Board::empty());

    let expected: Vec<Position> = neighbors_and_self(Position::new(3, 1))
        .into_iter()
        .filter(|&p| p != Position::new(3, 1) && p != Position::new(3, 2))
        .collect();

    assert_eq!(moves.to_vec(), expected);
    assert_eq!(moves.len(), 7);
}

#[test]
fn test_generate_moves_skips_capped_column() {
    let board = Board::from_rows([
        [0, 0, 4, 0, 0],
        [0, 0, 4, 0, 0],
        [0, 0, 4, 0, 0],
        [0, 0, 4, 0, 0],
        [0, 0, 4, 0, 0],
    ])
    .unwrap();
    let workers = WorkerSet::new(
        [Position::new(1, 2), Position::new(4, 0)],
        [Position::new(0, 0), Position::new(4, 4)],
    )
    .unwrap();

    let moves = candidate_moves(Player::A, Worker::First, &workers, &board);

    assert!(moves.iter().all(|&p| p.col() != 2));
    assert_eq!(moves.len(), 5);
}

// =============================================================================
// Build Validity
// =============================================================================

#[test]
fn test_build_must_be_adjacent_to_destination() {
    let mv = a0(3, 4);
    let c = Construction::new(Position::new(1, 2));
    assert!(!is_legal_build(&c, &mv, &reference_workers(), &Board::empty()));
}

#[test]
fn test_build_cannot_target_own_destination() {
    let mv = a0(3, 4);
    let c = Construction::new(Position::new(3, 4));
    assert!(!is_legal_build(&c, &mv, &reference_workers(), &Board::empty()));
}

#[test]
fn test_build_next_to_destination() {
    let mv = a0(3, 4);
    let c = Construction::new(Position::new(2, 4));
    assert!(is_legal_build(&c, &mv, &reference_workers(), &Board::empty()));
}

#[test]
fn test_build_cannot_target_capped() {
    let board = Board::from_rows([
        [1, 1, 2, 0, 3],
        [4, 2, 0, 4, 4],
        [4, 2, 1, 4, 4],
        [0, 4, 1, 0, 0],
        [3, 4, 4, 2, 1],
    ])
    .unwrap();
    let mv = a0(3, 4);
    let c = Construction::new(Position::new(2, 4));
    assert!(!is_legal_build(&c, &mv, &reference_workers(), &board));
}

#[test]
fn test_generate_builds_reference() {
    let mv = Move::new(Player::A, Worker::Second, Position::new(1, 1));
    let builds = candidate_builds(&mv, &reference_workers(), &reference_board());

    assert_eq!(builds.len(), 6);
    // vacated origin is buildable
    assert!(builds.contains(&Position::new(0, 0)));
    assert!(!builds.contains(&Position::new(1, 1)));
}

// =============================================================================
// Winning Moves
// =============================================================================

#[test]
fn test_move_is_winning() {
    let board = Board::from_rows([
        [1, 1, 2, 4, 3],
        [4, 2, 0, 0, 4],
        [4, 2, 3, 2, 4],
        [0, 4, 1, 0, 0],
        [3, 4, 0, 0, 1],
    ])
    .unwrap();

    let not_winning = Move::new(Player::A, Worker::Second, Position::new(1, 1));
    assert!(!is_winning_move(&not_winning, &board));

    assert!(is_winning_move(&a0(2, 2), &board));
}

#[test]
fn test_update_workers_position() {
    let workers = reference_workers();
    let moved = workers.with_move(&a0(1, 1));
    assert_eq!(moved.get(Player::A, Worker::First), Position::new(1, 1));
    assert_eq!(moved.get(Player::A, Worker::Second), Position::new(0, 0));
}
