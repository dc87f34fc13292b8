//! Queen move generation: the union of the rook and bishop rays, sharing a
//! single pin lookup.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::legal_move_shared::{generate_slider_moves, Direction, RAY_DIRECTIONS};
use crate::move_generation::move_generator::PositionView;
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(
    view: &PositionView<'_>,
    from: Square,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    let queen = Piece::new(view.side, PieceKind::Queen);
    generate_slider_moves(view.board, from, queen, pin, &RAY_DIRECTIONS, out);
}
