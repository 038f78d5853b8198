//! Turn actions: a move followed by a construction.
//!
//! These are descriptions, not mutations. Applying them produces new
//! `WorkerSet` and `Board` snapshots.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::error::{RuleError, RuleResult};
use super::player::{Player, Worker};
use super::position::Position;
use super::workers::WorkerSet;

/// Relocation of one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub player: Player,
    pub worker: Worker,
    pub destination: Position,
}

impl Move {
    #[must_use]
    pub const fn new(player: Player, worker: Worker, destination: Position) -> Self {
        Self {
            player,
            worker,
            destination,
        }
    }
}

/// A single-level build on one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Construction {
    pub target: Position,
}

impl Construction {
    #[must_use]
    pub const fn new(target: Position) -> Self {
        Self { target }
    }
}

/// A complete turn: move, then build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub mv: Move,
    pub build: Construction,
}

impl Turn {
    #[must_use]
    pub const fn new(mv: Move, build: Construction) -> Self {
        Self { mv, build }
    }

    /// Apply a generated turn to copies of the snapshots.
    #[must_use]
    pub fn apply(&self, workers: &WorkerSet, board: &Board) -> (WorkerSet, Board) {
        (workers.with_move(&self.mv), board.raised(self.build.target))
    }

    /// Apply a turn from untrusted input, checking occupancy and caps.
    ///
    /// Only the contract checks of `WorkerSet` and `Board` are applied;
    /// adjacency and climb rules live in `rules`.
    pub fn try_apply(&self, workers: &WorkerSet, board: &Board) -> RuleResult<(WorkerSet, Board)> {
        let moved = workers.try_with_move(&self.mv)?;
        if moved.is_occupied(self.build.target) {
            return Err(RuleError::OccupiedCell(self.build.target));
        }
        let built = board.with_increment(self.build.target)?;
        Ok((moved, built))
    }
}

/// Identity of a combination within one turn's enumeration.
///
/// `move_index` and `build_index` index the candidate lists produced by
/// the rule generators for that worker and move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId {
    pub worker: Worker,
    pub move_index: usize,
    pub build_index: usize,
}
