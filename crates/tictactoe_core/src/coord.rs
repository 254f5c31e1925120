//! Validated board coordinates.

use crate::BoardError;
use tracing::instrument;

/// A cell address: column counted from the left, row counted from the bottom,
/// both in `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({col}, {row})")]
pub struct Coord {
    col: u8,
    row: u8,
}

impl Coord {
    /// Smallest valid column or row.
    pub const MIN: i64 = 1;
    /// Largest valid column or row.
    pub const MAX: i64 = 3;

    /// All nine cells in scan order: row by row from the top-left as the
    /// board is displayed.
    ///
    /// This order is the board text linearization and the tie-break order
    /// for every computer opponent.
    pub const ALL: [Coord; 9] = [
        Coord::at(1, 3),
        Coord::at(2, 3),
        Coord::at(3, 3),
        Coord::at(1, 2),
        Coord::at(2, 2),
        Coord::at(3, 2),
        Coord::at(1, 1),
        Coord::at(2, 1),
        Coord::at(3, 1),
    ];

    pub(crate) const fn at(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Creates a coordinate, rejecting values outside `1..=3`.
    #[instrument]
    pub fn new(col: i64, row: i64) -> Result<Self, BoardError> {
        let range = Self::MIN..=Self::MAX;
        if !range.contains(&col) || !range.contains(&row) {
            return Err(BoardError::OutOfRange { col, row });
        }
        Ok(Self::at(col as u8, row as u8))
    }

    /// Column, counted from the left.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row, counted from the bottom.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Position of this cell in [`Coord::ALL`].
    pub(crate) fn index(self) -> usize {
        (Self::MAX as usize - self.row as usize) * 3 + (self.col as usize - 1)
    }
}
