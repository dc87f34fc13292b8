//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by board construction,
//! coordinate parsing and move submission. The engine is closed-world (an
//! 8x8 board with a fixed piece set), so every variant is a precondition
//! failure at the API boundary rather than a runtime fault:
//! - coordinate and piece-code variants are raised while building squares
//!   and boards from caller input,
//! - king-count variants reject positions the engine cannot reason about,
//! - `IllegalMove` is returned when a submitted move is not in the current
//!   legal-move list.

use thiserror::Error;

use crate::game_state::chess_types::Color;

/// Convenience alias for results carrying a [`ChessError`].
pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A square was requested outside the `0..=7` column/row range.
    #[error("square ({col}, {row}) is off the board")]
    InvalidSquare { col: i32, row: i32 },

    /// A piece code was not `--` or a `{w|b}{p|N|B|R|Q|K}` pair.
    #[error("invalid piece code '{0}'")]
    InvalidPieceCode(String),

    /// A coordinate string such as `e4` or `e2e4` failed to parse.
    #[error("invalid algebraic coordinate '{0}'")]
    InvalidAlgebraic(String),

    /// A board diagram did not have 8 rows of 8 cells.
    #[error("invalid board layout: {0}")]
    InvalidBoardLayout(String),

    /// The position has no king for the given side.
    #[error("no {0} king on the board")]
    MissingKing(Color),

    /// The position has more than one king for the given side.
    #[error("more than one {0} king on the board")]
    DuplicateKing(Color),

    /// The submitted move is not legal in the current position.
    #[error("illegal move {0}")]
    IllegalMove(String),
}
