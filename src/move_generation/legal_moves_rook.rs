//! Rook move generation along ranks and files.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::legal_move_shared::{
    generate_slider_moves, Direction, ORTHOGONAL_DIRECTIONS,
};
use crate::move_generation::move_generator::PositionView;
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(
    view: &PositionView<'_>,
    from: Square,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    let rook = Piece::new(view.side, PieceKind::Rook);
    generate_slider_moves(view.board, from, rook, pin, &ORTHOGONAL_DIRECTIONS, out);
}
