//! Board coordinates.
//!
//! A `Position` is a (column, row) pair on the 5x5 grid. Positions order
//! column-major, which fixes the enumeration order of every candidate set.

use serde::{Deserialize, Serialize};

use super::error::{RuleError, RuleResult};

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 5;

/// Largest valid coordinate.
pub const MAX_COORD: u8 = BOARD_SIZE - 1;

/// A cell on the board, always within bounds.
///
/// ```
/// use santorini_engine::core::Position;
///
/// let p = Position::new(3, 1);
/// assert_eq!(p.col(), 3);
/// assert_eq!(p.row(), 1);
/// assert!(Position::try_new(5, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    col: u8,
    row: u8,
}

/// Unchecked wire form, validated on deserialization.
#[derive(Deserialize)]
struct RawPosition {
    col: i32,
    row: i32,
}

impl TryFrom<RawPosition> for Position {
    type Error = RuleError;

    fn try_from(raw: RawPosition) -> RuleResult<Self> {
        Position::try_new(raw.col, raw.row)
    }
}

impl Position {
    /// Create a position from coordinates known to be in bounds.
    ///
    /// Panics if either coordinate exceeds 4. Use `try_new` for untrusted input.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        assert!(col <= MAX_COORD && row <= MAX_COORD, "Position out of bounds");
        Self { col, row }
    }

    /// Create a position, rejecting coordinates outside [0,4].
    pub fn try_new(col: i32, row: i32) -> RuleResult<Self> {
        let max = i32::from(MAX_COORD);
        if !(0..=max).contains(&col) || !(0..=max).contains(&row) {
            return Err(RuleError::OutOfRange { col, row });
        }
        Ok(Self {
            col: col as u8,
            row: row as u8,
        })
    }

    /// Offset this position, clamping each coordinate into the board.
    #[must_use]
    pub fn offset_clamped(self, dcol: i8, drow: i8) -> Self {
        let clamp = |v: u8, d: i8| (i16::from(v) + i16::from(d)).clamp(0, i16::from(MAX_COORD)) as u8;
        Self {
            col: clamp(self.col, dcol),
            row: clamp(self.row, drow),
        }
    }

    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// True if the position lies on the outer ring of the board.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        self.col == 0 || self.row == 0 || self.col == MAX_COORD || self.row == MAX_COORD
    }

    /// Iterate over all 25 cells in column-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|col| (0..BOARD_SIZE).map(move |row| Position { col, row }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
