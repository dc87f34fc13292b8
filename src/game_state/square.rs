//! Board coordinates.
//!
//! A `Square` is a `(col, row)` pair with both components in `0..=7`.
//! Column 0 is the a-file; row 0 is black's back rank (rank 8), so row 7 is
//! white's back rank. Off-board squares are never constructed: ray walking
//! goes through [`Square::offset`], which returns `None` at the edge.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessError, ChessResult};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Number of rows and columns on the board.
pub const DIMENSION: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    col: u8,
    row: u8,
}

impl Square {
    /// Build a square, failing fast on off-board coordinates.
    pub fn new(col: i32, row: i32) -> ChessResult<Self> {
        if (0..DIMENSION as i32).contains(&col) && (0..DIMENSION as i32).contains(&row) {
            Ok(Self {
                col: col as u8,
                row: row as u8,
            })
        } else {
            Err(ChessError::InvalidSquare { col, row })
        }
    }

    /// Build a square from components already known to be on the board.
    #[inline]
    pub(crate) const fn at(col: u8, row: u8) -> Self {
        debug_assert!(col < DIMENSION && row < DIMENSION);
        Self { col, row }
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// The square `(dc, dr)` away, or `None` past the board edge.
    #[inline]
    pub fn offset(self, dc: i8, dr: i8) -> Option<Self> {
        let col = self.col as i8 + dc;
        let row = self.row as i8 + dr;
        if (0..DIMENSION as i8).contains(&col) && (0..DIMENSION as i8).contains(&row) {
            Some(Self::at(col as u8, row as u8))
        } else {
            None
        }
    }

    /// All 64 squares, row-major from the top-left (a8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..DIMENSION).flat_map(|row| (0..DIMENSION).map(move |col| Square::at(col, row)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}
