//! The 8x8 piece grid.
//!
//! `Board` is a plain `Copy` value indexed `[row][col]`. `GameState` owns the
//! live instance and mutates it only inside its apply/revert pair; callers
//! get a shared borrow or a copy, never a mutable view of the live grid.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::{cell_code, parse_cell, Color, Piece, PieceKind};
use crate::game_state::square::{Square, DIMENSION};
use crate::utils::render_game_state::render_board;

const N: usize = DIMENSION as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; N]; N],
        }
    }

    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let home = color.home_row() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.cells[home][col] = Some(Piece::new(color, kind));
                board.cells[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    /// Build a board from 8 rows of whitespace-separated piece codes,
    /// top row (rank 8) first, e.g. `"bR -- -- -- bK -- -- bR"`.
    pub fn from_rows(rows: [&str; N]) -> ChessResult<Self> {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let codes: Vec<&str> = line.split_whitespace().collect();
            if codes.len() != N {
                return Err(ChessError::InvalidBoardLayout(format!(
                    "row {row} has {} cells, expected {N}",
                    codes.len()
                )));
            }
            for (col, code) in codes.into_iter().enumerate() {
                board.cells[row][col] = parse_cell(code)?;
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, cell: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = cell;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.get(square).map(|piece| piece.color)
    }

    /// The grid as piece codes (`--` for empty), indexed `[row][col]`.
    pub fn piece_codes(&self) -> [[&'static str; N]; N] {
        let mut out = [["--"; N]; N];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                out[row][col] = cell_code(*cell);
            }
        }
        out
    }

    /// Every occupied square with its piece, row-major from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Locate the king of `color` by scanning the grid.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.is(color, PieceKind::King))
            .map(|(sq, _)| sq)
    }

    /// Locate the single king of `color`, rejecting boards with none or several.
    pub fn unique_king_square(&self, color: Color) -> ChessResult<Square> {
        let mut kings = self
            .pieces()
            .filter(|(_, piece)| piece.is(color, PieceKind::King))
            .map(|(sq, _)| sq);
        let first = kings.next().ok_or(ChessError::MissingKing(color))?;
        if kings.next().is_some() {
            return Err(ChessError::DuplicateKing(color));
        }
        Ok(first)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTING_ROWS: [&str; 8] = [
        "bR bN bB bQ bK bB bN bR",
        "bp bp bp bp bp bp bp bp",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "-- -- -- -- -- -- -- --",
        "wp wp wp wp wp wp wp wp",
        "wR wN wB wQ wK wB wN wR",
    ];

    #[test]
    fn grid_parser_agrees_with_builder() {
        let parsed = Board::from_rows(STARTING_ROWS).expect("starting rows should parse");
        assert_eq!(parsed, Board::starting_position());
    }

    #[test]
    fn starting_position_matches_grid_codes() {
        let board = Board::starting_position();
        let codes = board.piece_codes();
        assert_eq!(codes[0], ["bR", "bN", "bB", "bQ", "bK", "bB", "bN", "bR"]);
        assert_eq!(codes[6], ["wp"; 8]);
        assert_eq!(codes[4], ["--"; 8]);
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.king_square(Color::White), Some(Square::at(4, 7)));
        assert_eq!(board.king_square(Color::Black), Some(Square::at(4, 0)));
    }

    #[test]
    fn from_rows_rejects_short_rows_and_bad_codes() {
        let mut rows = STARTING_ROWS;
        rows[3] = "-- -- --";
        assert!(matches!(
            Board::from_rows(rows),
            Err(ChessError::InvalidBoardLayout(_))
        ));

        let mut rows = STARTING_ROWS;
        rows[3] = "-- -- -- xx -- -- -- --";
        assert_eq!(
            Board::from_rows(rows),
            Err(ChessError::InvalidPieceCode("xx".to_owned()))
        );
    }

    #[test]
    fn unique_king_square_counts_kings() {
        let mut board = Board::empty();
        assert_eq!(
            board.unique_king_square(Color::White),
            Err(ChessError::MissingKing(Color::White))
        );
        board.set(Square::at(0, 0), Some(Piece::new(Color::White, PieceKind::King)));
        board.set(Square::at(7, 7), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(
            board.unique_king_square(Color::White),
            Err(ChessError::DuplicateKing(Color::White))
        );
    }
}
