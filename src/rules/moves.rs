//! Worker relocation rules.
//!
//! A worker steps to any neighboring cell that is unoccupied, not capped,
//! and at most one level higher than where it stands. Stepping down any
//! number of levels is allowed.

use smallvec::SmallVec;

use crate::core::{Board, Move, Player, Worker, WorkerSet};

use super::neighborhood::{neighbors_and_self, Cells};

/// Moves for one player, both workers. At most 16 entries.
pub type Moves = SmallVec<[Move; 16]>;

/// Destinations the given worker may move to, sorted column-major.
#[must_use]
pub fn candidate_moves(player: Player, worker: Worker, workers: &WorkerSet, board: &Board) -> Cells {
    let origin = workers.get(player, worker);
    let max_height = board.height_at(origin).saturating_add(1);

    neighbors_and_self(origin)
        .into_iter()
        .filter(|&cell| {
            cell != origin
                && !workers.is_occupied(cell)
                && !board.is_capped(cell)
                && board.height_at(cell) <= max_height
        })
        .collect()
}

/// True if `mv` is one of the generated candidates for its worker.
#[must_use]
pub fn is_legal_move(mv: &Move, workers: &WorkerSet, board: &Board) -> bool {
    candidate_moves(mv.player, mv.worker, workers, board).contains(&mv.destination)
}

/// All legal moves for `player`, first worker first.
#[must_use]
pub fn legal_moves(player: Player, workers: &WorkerSet, board: &Board) -> Moves {
    Worker::BOTH
        .into_iter()
        .flat_map(|worker| {
            candidate_moves(player, worker, workers, board)
                .into_iter()
                .map(move |destination| Move::new(player, worker, destination))
        })
        .collect()
}
