//! Height grid.
//!
//! The board is a small `Copy` value. Every hypothetical evaluation works on
//! its own copy, so speculative builds never touch the authoritative board.
//!
//! Heights are stored row-major (`rows[row][col]`) so boards can be written
//! as literals that read like the physical grid.

use serde::{Deserialize, Serialize};

use super::error::{RuleError, RuleResult};
use super::position::{Position, BOARD_SIZE};

/// Height of a capped cell: impassable and unbuildable.
pub const CAPPED: u8 = 4;

/// Height a worker must stand on to win.
pub const WINNING_HEIGHT: u8 = 3;

const SIZE: usize = BOARD_SIZE as usize;

/// 5x5 grid of building heights in [0,4].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[[u8; 5]; 5]", into = "[[u8; 5]; 5]")]
pub struct Board {
    rows: [[u8; SIZE]; SIZE],
}

impl Board {
    /// A board with every cell at ground level.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            rows: [[0; SIZE]; SIZE],
        }
    }

    /// Build a board from row-major heights.
    ///
    /// ```
    /// use santorini_engine::core::{Board, Position};
    ///
    /// let board = Board::from_rows([
    ///     [1, 1, 2, 4, 3],
    ///     [4, 2, 0, 0, 4],
    ///     [4, 2, 1, 2, 4],
    ///     [0, 4, 1, 0, 0],
    ///     [3, 4, 0, 0, 1],
    /// ]).unwrap();
    ///
    /// // column 3, row 0
    /// assert_eq!(board.height_at(Position::new(3, 0)), 4);
    /// ```
    pub fn from_rows(rows: [[u8; SIZE]; SIZE]) -> RuleResult<Self> {
        for pos in Position::all() {
            let height = rows[pos.row() as usize][pos.col() as usize];
            if height > CAPPED {
                return Err(RuleError::InvalidHeight { pos, height });
            }
        }
        Ok(Self { rows })
    }

    #[must_use]
    pub fn height_at(&self, pos: Position) -> u8 {
        self.rows[pos.row() as usize][pos.col() as usize]
    }

    #[must_use]
    pub fn is_capped(&self, pos: Position) -> bool {
        self.height_at(pos) >= CAPPED
    }

    /// Return a new board with one level added at `pos`.
    ///
    /// Bounds are guaranteed by `Position`; fails with `CappedCell` if the
    /// cell is already at height 4.
    pub fn with_increment(&self, pos: Position) -> RuleResult<Self> {
        if self.is_capped(pos) {
            return Err(RuleError::CappedCell(pos));
        }
        Ok(self.raised(pos))
    }

    /// Add one level at a cell already known to be buildable.
    #[must_use]
    pub(crate) fn raised(&self, pos: Position) -> Self {
        debug_assert!(!self.is_capped(pos), "raised a capped cell at {pos}");
        let mut next = *self;
        let cell = &mut next.rows[pos.row() as usize][pos.col() as usize];
        *cell += 1;
        next
    }

    /// Sum of all heights (number of blocks placed).
    #[must_use]
    pub fn total_height(&self) -> u32 {
        self.rows.iter().flatten().map(|&h| u32::from(h)).sum()
    }
}

impl TryFrom<[[u8; SIZE]; SIZE]> for Board {
    type Error = RuleError;

    fn try_from(rows: [[u8; SIZE]; SIZE]) -> RuleResult<Self> {
        Board::from_rows(rows)
    }
}

impl From<Board> for [[u8; SIZE]; SIZE] {
    fn from(board: Board) -> Self {
        board.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "raised a capped cell")]
    fn test_raised_capped_cell_panics() {
        let board = Board::from_rows([[4; 5]; 5]).unwrap();
        let _ = board.raised(Position::new(2, 2));
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert!(Position::all().all(|p| board.height_at(p) == 0));
        assert_eq!(board, Board::default());
        assert_eq!(board.total_height(), 0);
    }

    #[test]
    fn test_from_rows_indexing() {
        let board = Board::from_rows([
            [0, 1, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 2],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap();

        assert_eq!(board.height_at(Position::new(1, 0)), 1);
        assert_eq!(board.height_at(Position::new(4, 2)), 2);
        assert_eq!(board.height_at(Position::new(0, 1)), 0);
    }

    #[test]
    fn test_from_rows_rejects_invalid_height() {
        let mut rows = [[0; 5]; 5];
        rows[3][1] = 5;
        assert_eq!(
            Board::from_rows(rows),
            Err(RuleError::InvalidHeight {
                pos: Position::new(1, 3),
                height: 5
            })
        );
    }

    #[test]
    fn test_with_increment_is_functional() {
        let board = Board::empty();
        let pos = Position::new(2, 2);

        let next = board.with_increment(pos).unwrap();

        assert_eq!(board.height_at(pos), 0);
        assert_eq!(next.height_at(pos), 1);
        assert_eq!(next.total_height(), 1);
    }

    #[test]
    fn test_with_increment_up_to_cap() {
        let pos = Position::new(0, 4);
        let mut board = Board::empty();
        for level in 1..=CAPPED {
            board = board.with_increment(pos).unwrap();
            assert_eq!(board.height_at(pos), level);
        }

        assert!(board.is_capped(pos));
        assert_eq!(board.with_increment(pos), Err(RuleError::CappedCell(pos)));
    }

    #[test]
    fn test_serde_validates_heights() {
        let board = Board::from_rows([[1, 2, 3, 4, 0]; 5]).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, back);

        let bad = "[[9,0,0,0,0],[0,0,0,0,0],[0,0,0,0,0],[0,0,0,0,0],[0,0,0,0,0]]";
        assert!(serde_json::from_str::<Board>(bad).is_err());
    }
}
