//! Win and stuck detection.

use crate::core::{Board, Move, Player, Worker, WorkerSet, WINNING_HEIGHT};

use super::builds::candidate_builds;
use super::moves::candidate_moves;

/// True if the mover stands at height 3 once the turn's build is placed.
#[must_use]
pub fn is_winning_move(mv: &Move, board_after_build: &Board) -> bool {
    board_after_build.height_at(mv.destination) == WINNING_HEIGHT
}

/// True if `player` has no move at all, or no build after any move.
///
/// Counts are aggregated over both workers.
#[must_use]
pub fn is_stuck(player: Player, workers: &WorkerSet, board: &Board) -> bool {
    let mut move_count = 0usize;
    let mut build_count = 0usize;

    for worker in Worker::BOTH {
        for destination in candidate_moves(player, worker, workers, board) {
            move_count += 1;
            let mv = Move::new(player, worker, destination);
            build_count += candidate_builds(&mv, workers, board).len();
        }
    }

    move_count == 0 || build_count == 0
}

/// True if `player` could step onto a height-3 cell right now.
///
/// One ply only: whether the win would be followed by a legal build is not
/// considered.
#[must_use]
pub fn can_win_immediately(player: Player, workers: &WorkerSet, board: &Board) -> bool {
    Worker::BOTH.into_iter().any(|worker| {
        candidate_moves(player, worker, workers, board)
            .into_iter()
            .any(|destination| is_winning_move(&Move::new(player, worker, destination), board))
    })
}
