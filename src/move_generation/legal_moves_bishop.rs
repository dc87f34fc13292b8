//! Bishop move generation along diagonals.

use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::legal_move_shared::{
    generate_slider_moves, Direction, DIAGONAL_DIRECTIONS,
};
use crate::move_generation::move_generator::PositionView;
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(
    view: &PositionView<'_>,
    from: Square,
    pin: Option<Direction>,
    out: &mut Vec<Move>,
) {
    let bishop = Piece::new(view.side, PieceKind::Bishop);
    generate_slider_moves(view.board, from, bishop, pin, &DIAGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::castle_rights::CastleRights;
    use crate::game_state::chess_types::Color;

    #[test]
    fn bishop_pinned_on_a_file_cannot_move() {
        let board = Board::from_rows([
            "-- -- -- -- bR -- -- bK",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- wB -- -- --",
            "-- -- -- -- wK -- -- --",
        ])
        .expect("board should parse");
        let view = PositionView {
            board: &board,
            side: Color::White,
            king: "e1".parse().expect("e1 should parse"),
            en_passant: None,
            castle_rights: CastleRights::none(),
        };
        let e2: Square = "e2".parse().expect("e2 should parse");

        let mut out = Vec::new();
        generate_bishop_moves(&view, e2, Some((0, -1)), &mut out);
        assert!(out.is_empty());

        generate_bishop_moves(&view, e2, None, &mut out);
        // d1 and f1 are free; the long diagonals run to a6 and h5.
        assert_eq!(out.len(), 9);
    }
}
