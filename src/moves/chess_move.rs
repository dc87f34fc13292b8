//! The move record handed between the generator, the game state and callers.
//!
//! Promotion and castling are derived from the moved piece and the move's
//! geometry rather than stored. Equality and hashing look only at the
//! origin and destination squares, which is what a caller holding two
//! clicked squares can supply; the engine always applies its own copy of a
//! matched move so the derived flags come from the generator.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::square::Square;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    /// Piece removed by this move. For en passant this is the passed pawn,
    /// which does not stand on `end`.
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
}

impl Move {
    #[inline]
    pub const fn new(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
    ) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_en_passant: false,
        }
    }

    #[inline]
    pub const fn en_passant(start: Square, end: Square, pawn: Piece, captured_pawn: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved: pawn,
            piece_captured: Some(captured_pawn),
            is_en_passant: true,
        }
    }

    /// Numeric identity of the coordinates: `start.col start.row end.col end.row` as decimal digits.
    #[inline]
    pub fn move_id(&self) -> u16 {
        u16::from(self.start.col()) * 1000
            + u16::from(self.start.row()) * 100
            + u16::from(self.end.col()) * 10
            + u16::from(self.end.row())
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_pawn_promotion(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn
            && self.end.row() == self.piece_moved.color.promotion_row()
    }

    #[inline]
    pub fn is_castle_move(&self) -> bool {
        self.piece_moved.kind == PieceKind::King
            && (i16::from(self.end.col()) - i16::from(self.start.col())).abs() == 2
    }

    /// Square of the captured piece: the landing square, or the passed
    /// pawn's square for en passant.
    #[inline]
    pub fn capture_square(&self) -> Square {
        if self.is_en_passant {
            Square::at(self.end.col(), self.start.row())
        } else {
            self.end
        }
    }

    /// Whether this move has the given origin and destination.
    #[inline]
    pub fn connects(&self, start: Square, end: Square) -> bool {
        self.start == start && self.end == end
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start, self.end)?;
        if self.is_pawn_promotion() {
            write!(f, "q")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::game_state::chess_types::Color;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn equality_ignores_pieces_and_flags() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let queen = Piece::new(Color::White, PieceKind::Queen);
        let a = Move::new(sq("e2"), sq("e4"), pawn, None);
        let b = Move::new(sq("e2"), sq("e4"), queen, Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert_ne!(a, Move::new(sq("e2"), sq("e3"), pawn, None));
    }

    #[test]
    fn derives_promotion_and_castling_from_geometry() {
        let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
        assert!(Move::new(sq("a7"), sq("a8"), white_pawn, None).is_pawn_promotion());
        assert!(!Move::new(sq("a7"), sq("a8"), black_pawn, None).is_pawn_promotion());
        assert!(Move::new(sq("h2"), sq("h1"), black_pawn, None).is_pawn_promotion());

        let king = Piece::new(Color::White, PieceKind::King);
        assert!(Move::new(sq("e1"), sq("g1"), king, None).is_castle_move());
        assert!(Move::new(sq("e1"), sq("c1"), king, None).is_castle_move());
        assert!(!Move::new(sq("e1"), sq("f1"), king, None).is_castle_move());
    }

    #[test]
    fn en_passant_captures_beside_the_landing_square() {
        let mv = Move::en_passant(
            sq("e5"),
            sq("d6"),
            Piece::new(Color::White, PieceKind::Pawn),
            Piece::new(Color::Black, PieceKind::Pawn),
        );
        assert_eq!(mv.capture_square(), sq("d5"));
        assert!(mv.is_capture());
    }

    #[test]
    fn id_and_display() {
        let mv = Move::new(sq("e2"), sq("e4"), Piece::new(Color::White, PieceKind::Pawn), None);
        assert_eq!(mv.move_id(), 4 * 1000 + 6 * 100 + 4 * 10 + 4);
        assert_eq!(mv.to_string(), "e2e4");
        let promo = Move::new(sq("b7"), sq("b8"), Piece::new(Color::White, PieceKind::Pawn), None);
        assert_eq!(promo.to_string(), "b7b8q");
    }
}
