//! Santorini legality rules.
//!
//! Pure functions over `WorkerSet` and `Board` snapshots:
//! - `neighborhood`: the clamped 3x3 block shared by moves and builds
//! - `moves`: where a worker may step
//! - `builds`: where it may build after stepping
//! - `terminal`: win and stuck detection

pub mod neighborhood;
pub mod moves;
pub mod builds;
pub mod terminal;

pub use neighborhood::{neighbors_and_self, Cells};
pub use moves::{candidate_moves, is_legal_move, legal_moves, Moves};
pub use builds::{candidate_builds, is_legal_build};
pub use terminal::{can_win_immediately, is_stuck, is_winning_move};
