//! Pseudo-legal move generation: every piece of the side to move, with pins
//! already applied. Checks are resolved later by the legal filter.

use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::legal_move_shared::take_pin;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::pins_and_checks::PinOrCheck;
use crate::moves::chess_move::Move;

/// Read-only slice of a position that move generation needs.
#[derive(Debug, Clone, Copy)]
pub struct PositionView<'a> {
    pub board: &'a Board,
    pub side: Color,
    pub king: Square,
    pub en_passant: Option<Square>,
    pub castle_rights: CastleRights,
}

/// Generate moves for every piece of `view.side`. Each pin in `pins` is
/// consumed by the piece standing on its square.
pub fn generate_pseudo_legal_moves(
    view: &PositionView<'_>,
    pins: &mut Vec<PinOrCheck>,
    out: &mut Vec<Move>,
) {
    for (from, piece) in view.board.pieces() {
        if piece.color != view.side {
            continue;
        }
        let pin = take_pin(pins, from);
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(view, from, pin, out),
            PieceKind::Knight => generate_knight_moves(view, from, pin, out),
            PieceKind::Bishop => generate_bishop_moves(view, from, pin, out),
            PieceKind::Rook => generate_rook_moves(view, from, pin, out),
            PieceKind::Queen => generate_queen_moves(view, from, pin, out),
            PieceKind::King => generate_king_moves(view, from, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_pseudo_legal_moves_from_the_start() {
        let board = Board::starting_position();
        let view = PositionView {
            board: &board,
            side: Color::White,
            king: "e1".parse().expect("e1 should parse"),
            en_passant: None,
            castle_rights: CastleRights::all(),
        };
        let mut out = Vec::new();
        generate_pseudo_legal_moves(&view, &mut Vec::new(), &mut out);
        assert_eq!(out.len(), 20);
        assert_eq!(out.iter().filter(|m| m.piece_moved.kind == PieceKind::Knight).count(), 4);
    }

    #[test]
    fn pins_are_consumed_by_their_piece() {
        let board = Board::from_rows([
            "-- -- -- -- bR -- -- bK",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wR -- -- --",
            "-- -- -- -- wK -- -- --",
        ])
        .expect("board should parse");
        let e2: Square = "e2".parse().expect("e2 should parse");
        let view = PositionView {
            board: &board,
            side: Color::White,
            king: "e1".parse().expect("e1 should parse"),
            en_passant: None,
            castle_rights: CastleRights::none(),
        };
        let mut pins = vec![PinOrCheck::new(e2, (0, -1))];
        let mut out = Vec::new();
        generate_pseudo_legal_moves(&view, &mut pins, &mut out);
        assert!(pins.is_empty());

        let rook_moves: Vec<&Move> = out.iter().filter(|m| m.start == e2).collect();
        // Up the file to the pinner, capture included.
        assert_eq!(rook_moves.len(), 6);
        assert!(rook_moves.iter().all(|m| m.end.col() == e2.col()));
    }
}
