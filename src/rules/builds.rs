//! Construction rules.
//!
//! After moving, the worker builds on any neighboring cell that is not
//! capped and not occupied once the move is applied. The cell it just left
//! is therefore buildable; the one it now stands on is not.

use crate::core::{Board, Construction, Move, WorkerSet};

use super::neighborhood::{neighbors_and_self, Cells};

/// Build targets available after `mv`, sorted column-major.
#[must_use]
pub fn candidate_builds(mv: &Move, workers: &WorkerSet, board: &Board) -> Cells {
    let moved = workers.with_move(mv);

    neighbors_and_self(mv.destination)
        .into_iter()
        .filter(|&cell| !moved.is_occupied(cell) && !board.is_capped(cell))
        .collect()
}

/// True if `construction` is one of the generated targets after `mv`.
#[must_use]
pub fn is_legal_build(construction: &Construction, mv: &Move, workers: &WorkerSet, board: &Board) -> bool {
    candidate_builds(mv, workers, board).contains(&construction.target)
}
