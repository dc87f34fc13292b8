//! Knight move generation. A pinned knight has no moves: every jump leaves
//! the pin line.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::legal_move_shared::{
    occupied_by, quiet_or_capture, Direction, KNIGHT_OFFSETS,
};
use crate::move_generation::move_generator::PositionView;
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(
    view: &PositionView<'_>,
    from: Square,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    if pin.is_some() {
        return;
    }

    let knight = Piece::new(view.side, PieceKind::Knight);
    for (d_col, d_row) in KNIGHT_OFFSETS {
        let Some(to) = from.offset(d_col, d_row) else {
            continue;
        };
        if !occupied_by(view.board, to, view.side) {
            out.push(quiet_or_capture(view.board, from, to, knight));
        }
    }
}
