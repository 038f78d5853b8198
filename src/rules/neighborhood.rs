//! The 3x3 neighborhood shared by move and build generation.
//!
//! Offsets that fall off the board are clamped back onto it rather than
//! dropped, so edge and corner cells collapse onto the border. The result is
//! a set: duplicates are removed.

use smallvec::SmallVec;

use crate::core::Position;

/// A candidate cell set. Never more than 9 entries, sorted column-major.
pub type Cells = SmallVec<[Position; 9]>;

const OFFSETS: [(i8, i8); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The clamped 3x3 block around `pos`, including `pos` itself.
///
/// ```
/// use santorini_engine::core::Position;
/// use santorini_engine::rules::neighbors_and_self;
///
/// assert_eq!(neighbors_and_self(Position::new(2, 2)).len(), 9);
/// assert_eq!(neighbors_and_self(Position::new(0, 2)).len(), 6);
/// assert_eq!(neighbors_and_self(Position::new(4, 4)).len(), 4);
/// ```
#[must_use]
pub fn neighbors_and_self(pos: Position) -> Cells {
    let mut cells: Cells = OFFSETS
        .iter()
        .map(|&(dcol, drow)| pos.offset_clamped(dcol, drow))
        .collect();
    cells.sort_unstable();
    cells.dedup();
    cells
}
