//! Castle move generation.
//!
//! Appended after the legality filter, and only when the side is not in
//! check. Each wing needs its right, an own rook in the corner, empty squares
//! between king and rook, and unattacked squares for the king to cross and
//! land on.

use crate::game_state::chess_rules::{KING_HOME_COL, KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::move_generator::PositionView;
use crate::move_generation::pins_and_checks::is_square_attacked;
use crate::moves::chess_move::Move;

pub fn generate_castle_moves(view: &PositionView<'_>, out: &mut Vec<Move>) {
    let side = view.side;
    let row = side.home_row();
    let king_home = Square::at(KING_HOME_COL, row);

    if view.king != king_home || is_square_attacked(view.board, side, king_home) {
        return;
    }

    let king = Piece::new(side, PieceKind::King);
    let rook = Piece::new(side, PieceKind::Rook);
    let at = |col: u8| Square::at(col, row);
    let empty = |cols: &[u8]| cols.iter().all(|&col| view.board.is_empty(at(col)));
    let safe = |cols: &[u8]| {
        cols.iter()
            .all(|&col| !is_square_attacked(view.board, side, at(col)))
    };

    if view.castle_rights.king_side(side)
        && view.board.get(at(KING_SIDE_ROOK_COL)) == Some(rook)
        && empty(&[5, 6])
        && safe(&[5, 6])
    {
        out.push(Move::new(king_home, at(6), king, None));
    }

    if view.castle_rights.queen_side(side)
        && view.board.get(at(QUEEN_SIDE_ROOK_COL)) == Some(rook)
        && empty(&[1, 2, 3])
        && safe(&[2, 3])
    {
        out.push(Move::new(king_home, at(2), king, None));
    }
}
