//! Error types for rule and configuration contract violations.
//!
//! Rule errors are raised only by the checked public constructors. Code that
//! works from generated candidates never produces them.

use thiserror::Error;

use super::position::Position;

/// Violations of the board and occupancy contracts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// Coordinates outside the 5x5 grid.
    #[error("position ({col}, {row}) is outside the board (must be 0-4)")]
    OutOfRange { col: i32, row: i32 },

    /// A height above the capped level.
    #[error("height {height} at {pos} exceeds the capped level 4")]
    InvalidHeight { pos: Position, height: u8 },

    /// Attempted build on a cell already at height 4.
    #[error("cell {0} is capped")]
    CappedCell(Position),

    /// Attempted move or build onto a cell holding a worker.
    #[error("cell {0} is occupied by a worker")]
    OccupiedCell(Position),
}

/// Invalid selector or runner configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("baseline range {min}..={max} is empty")]
    EmptyBaselineRange { min: i32, max: i32 },

    #[error("baseline range {min}..={max} must be positive and below the win score")]
    BaselineOutOfBounds { min: i32, max: i32 },
}

/// Result type alias for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;
