//! Worker placement.
//!
//! `WorkerSet` is a fixed-shape table: two players, two workers each. Every
//! slot always holds a position, and the four positions are pairwise
//! distinct.

use serde::{Deserialize, Serialize};

use super::action::Move;
use super::error::{RuleError, RuleResult};
use super::player::{Player, Worker};
use super::position::Position;

/// Positions of all four workers, indexed by player then worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[[Position; 2]; 2]", into = "[[Position; 2]; 2]")]
pub struct WorkerSet {
    slots: [[Position; 2]; 2],
}

impl WorkerSet {
    /// Place all four workers, rejecting any shared cell.
    ///
    /// ```
    /// use santorini_engine::core::{Player, Position, Worker, WorkerSet};
    ///
    /// let workers = WorkerSet::new(
    ///     [Position::new(3, 1), Position::new(0, 0)],
    ///     [Position::new(3, 2), Position::new(4, 4)],
    /// ).unwrap();
    ///
    /// assert_eq!(workers.get(Player::B, Worker::First), Position::new(3, 2));
    /// assert!(WorkerSet::new(
    ///     [Position::new(1, 1), Position::new(1, 1)],
    ///     [Position::new(2, 2), Position::new(3, 3)],
    /// ).is_err());
    /// ```
    pub fn new(a: [Position; 2], b: [Position; 2]) -> RuleResult<Self> {
        let set = Self { slots: [a, b] };
        let all = set.all();
        for (i, pos) in all.iter().enumerate() {
            if all[i + 1..].contains(pos) {
                return Err(RuleError::OccupiedCell(*pos));
            }
        }
        Ok(set)
    }

    #[must_use]
    pub fn get(&self, player: Player, worker: Worker) -> Position {
        self.slots[player.index()][worker.index()]
    }

    /// Both workers of one player.
    #[must_use]
    pub fn of(&self, player: Player) -> [Position; 2] {
        self.slots[player.index()]
    }

    /// All four positions: player A's workers, then player B's.
    #[must_use]
    pub fn all(&self) -> [Position; 4] {
        let [[a0, a1], [b0, b1]] = self.slots;
        [a0, a1, b0, b1]
    }

    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.all().contains(&pos)
    }

    /// Which worker, if any, stands at `pos`.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<(Player, Worker)> {
        Player::ALL
            .into_iter()
            .flat_map(|p| Worker::BOTH.into_iter().map(move |w| (p, w)))
            .find(|&(p, w)| self.get(p, w) == pos)
    }

    /// Return a new set with exactly one worker relocated.
    ///
    /// Pure slot replacement: occupancy is not checked. Use `try_with_move`
    /// for unchecked input.
    #[must_use]
    pub fn with_move(&self, mv: &Move) -> Self {
        let mut next = *self;
        next.slots[mv.player.index()][mv.worker.index()] = mv.destination;
        next
    }

    /// Relocate one worker, failing if another worker holds the destination.
    pub fn try_with_move(&self, mv: &Move) -> RuleResult<Self> {
        match self.occupant(mv.destination) {
            Some(who) if who != (mv.player, mv.worker) => {
                Err(RuleError::OccupiedCell(mv.destination))
            }
            _ => Ok(self.with_move(mv)),
        }
    }
}

impl TryFrom<[[Position; 2]; 2]> for WorkerSet {
    type Error = RuleError;

    fn try_from([a, b]: [[Position; 2]; 2]) -> RuleResult<Self> {
        WorkerSet::new(a, b)
    }
}

impl From<WorkerSet> for [[Position; 2]; 2] {
    fn from(set: WorkerSet) -> Self {
        set.slots
    }
}
