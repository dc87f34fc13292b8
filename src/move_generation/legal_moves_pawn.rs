//! Pawn move generation: single and double advances, diagonal captures and
//! en-passant captures. Landing on the last rank is a plain move here; the
//! promotion to a queen happens when the move is applied.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::legal_move_shared::{along_pin, occupied_by, Direction};
use crate::move_generation::move_generator::PositionView;
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(
    view: &PositionView<'_>,
    from: Square,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    let board = view.board;
    let side = view.side;
    let enemy = side.opposite();
    let pawn = Piece::new(side, PieceKind::Pawn);
    let step = side.pawn_step();

    if along_pin(pin, (0, step)) {
        if let Some(one) = from.offset(0, step).filter(|sq| board.is_empty(*sq)) {
            out.push(Move::new(from, one, pawn, None));

            if from.row() == side.pawn_start_row() {
                if let Some(two) = one.offset(0, step).filter(|sq| board.is_empty(*sq)) {
                    out.push(Move::new(from, two, pawn, None));
                }
            }
        }
    }

    for d_col in [-1i8, 1] {
        if !along_pin(pin, (d_col, step)) {
            continue;
        }
        let Some(to) = from.offset(d_col, step) else {
            continue;
        };

        if occupied_by(board, to, enemy) {
            out.push(Move::new(from, to, pawn, board.get(to)));
        } else if view.en_passant == Some(to) {
            let Some(beside) = from.offset(d_col, 0) else {
                continue;
            };
            if let Some(victim) = board.get(beside).filter(|p| p.is(enemy, PieceKind::Pawn)) {
                out.push(Move::en_passant(from, to, pawn, victim));
            }
        }
    }
}
