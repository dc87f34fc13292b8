//! Piece and side primitives shared by the board, move and generator modules.
//!
//! Pieces use the two-character `{color}{kind}` code of the board grid
//! (`wK`, `bp`, ...); an empty cell is `None` and renders as `--`.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessError;

/// Code rendered for an empty board cell.
pub const EMPTY_CODE: &str = "--";

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// First character of this side's piece codes.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Row delta of a single pawn step. Row 0 is black's back rank.
    #[inline]
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this side's king and rooks at the start of the game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row this side's pawns start on and may double-advance from.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this side's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'p' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece occupying a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// Two-character board code, e.g. `wK` or `bp`.
    pub const fn code(self) -> &'static str {
        use Color::*;
        use PieceKind::*;
        match (self.color, self.kind) {
            (White, Pawn) => "wp",
            (White, Knight) => "wN",
            (White, Bishop) => "wB",
            (White, Rook) => "wR",
            (White, Queen) => "wQ",
            (White, King) => "wK",
            (Black, Pawn) => "bp",
            (Black, Knight) => "bN",
            (Black, Bishop) => "bB",
            (Black, Rook) => "bR",
            (Black, Queen) => "bQ",
            (Black, King) => "bK",
        }
    }
}

/// Board code of a cell, `--` when empty.
#[inline]
pub fn cell_code(cell: Option<Piece>) -> &'static str {
    cell.map_or(EMPTY_CODE, Piece::code)
}

/// Parse a board cell code: `--` is an empty cell, anything else must be a piece code.
pub fn parse_cell(code: &str) -> Result<Option<Piece>, ChessError> {
    if code == EMPTY_CODE {
        Ok(None)
    } else {
        code.parse::<Piece>().map(Some)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Piece {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(color), Some(kind), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ChessError::InvalidPieceCode(s.to_owned()));
        };
        let color = match color {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return Err(ChessError::InvalidPieceCode(s.to_owned())),
        };
        let kind =
            PieceKind::from_code(kind).ok_or_else(|| ChessError::InvalidPieceCode(s.to_owned()))?;
        Ok(Piece::new(color, kind))
    }
}
