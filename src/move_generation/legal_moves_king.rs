//! King step generation.
//!
//! Unlike the other pieces a king cannot rely on pin information, so every
//! candidate square is probed with the attack analyzer as if the king
//! already stood there. The probe is pure; nothing is relocated.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::legal_move_shared::{occupied_by, quiet_or_capture, KING_OFFSETS};
use crate::move_generation::move_generator::PositionView;
use crate::move_generation::pins_and_checks::is_square_attacked;
use crate::moves::chess_move::Move;

pub fn generate_king_moves(view: &PositionView<'_>, from: Square, out: &mut Vec<Move>) {
    let king = Piece::new(view.side, PieceKind::King);

    for (d_col, d_row) in KING_OFFSETS {
        let Some(to) = from.offset(d_col, d_row) else {
            continue;
        };
        if occupied_by(view.board, to, view.side) {
            continue;
        }
        if !is_square_attacked(view.board, view.side, to) {
            out.push(quiet_or_capture(view.board, from, to, king));
        }
    }
}
