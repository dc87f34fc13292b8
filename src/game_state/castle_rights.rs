//! Per-side, per-wing castling eligibility.
//!
//! Rights only ever go from `true` to `false` during a game. They are lost
//! when the king moves, when the relevant rook leaves its home square, or
//! when that rook is captured on its home square.

use std::fmt;

use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub white_king_side: bool,
    pub black_king_side: bool,
    pub white_queen_side: bool,
    pub black_queen_side: bool,
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastleRights {
    pub const fn all() -> Self {
        Self {
            white_king_side: true,
            black_king_side: true,
            white_queen_side: true,
            black_queen_side: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_king_side: false,
            black_king_side: false,
            white_queen_side: false,
            black_queen_side: false,
        }
    }

    #[inline]
    pub fn king_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    #[inline]
    pub fn queen_side(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    pub fn revoke_king_side(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_side = false,
            Color::Black => self.black_king_side = false,
        }
    }

    pub fn revoke_queen_side(&mut self, color: Color) {
        match color {
            Color::White => self.white_queen_side = false,
            Color::Black => self.black_queen_side = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke_king_side(color);
        self.revoke_queen_side(color);
    }

    /// Drop whatever rights `mv` forfeits: a king move, a rook leaving its
    /// corner, or a rook captured in its corner.
    pub fn revoke_for(&mut self, mv: &Move) {
        let mover = mv.piece_moved;
        match mover.kind {
            PieceKind::King => self.revoke_all(mover.color),
            PieceKind::Rook => self.revoke_for_corner(mover.color, mv.start.col(), mv.start.row()),
            _ => {}
        }

        if let Some(captured) = mv.piece_captured {
            if captured.kind == PieceKind::Rook {
                self.revoke_for_corner(captured.color, mv.end.col(), mv.end.row());
            }
        }
    }

    fn revoke_for_corner(&mut self, color: Color, col: u8, row: u8) {
        if row != color.home_row() {
            return;
        }
        match col {
            QUEEN_SIDE_ROOK_COL => self.revoke_queen_side(color),
            KING_SIDE_ROOK_COL => self.revoke_king_side(color),
            _ => {}
        }
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        if self.white_king_side {
            out.push('K');
        }
        if self.white_queen_side {
            out.push('Q');
        }
        if self.black_king_side {
            out.push('k');
        }
        if self.black_queen_side {
            out.push('q');
        }
        if out.is_empty() {
            out.push('-');
        }
        f.write_str(&out)
    }
}
