//! Make/unmake of a single move.
//!
//! The board half (`apply_to_board` / `revert_on_board`) is shared with the
//! en-passant safety simulation, which plays a move on a scratch copy. The
//! game half keeps the history stacks: every applied move pushes one entry
//! onto the move log, the castle-rights log and the en-passant log, and
//! every revert pops one from each.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::square::Square;
use crate::moves::chess_move::Move;

/// Rook origin and destination for a castle move, on the king's row.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.start.row();
    if mv.end.col() > mv.start.col() {
        (
            Square::at(KING_SIDE_ROOK_COL, row),
            Square::at(mv.end.col() - 1, row),
        )
    } else {
        (
            Square::at(QUEEN_SIDE_ROOK_COL, row),
            Square::at(mv.end.col() + 1, row),
        )
    }
}

/// Move the pieces for `mv`. Pawns reaching the last rank become queens.
pub fn apply_to_board(board: &mut Board, mv: &Move) {
    let mover = mv.piece_moved;
    board.set(mv.start, None);
    if mv.is_en_passant {
        board.set(mv.capture_square(), None);
    }

    let landed = if mv.is_pawn_promotion() {
        Piece::new(mover.color, PieceKind::Queen)
    } else {
        mover
    };
    board.set(mv.end, Some(landed));

    if mv.is_castle_move() {
        let (rook_from, rook_to) = castle_rook_squares(mv);
        let rook = board.get(rook_from);
        board.set(rook_from, None);
        board.set(rook_to, rook);
    }
}

/// Exact inverse of [`apply_to_board`].
pub fn revert_on_board(board: &mut Board, mv: &Move) {
    board.set(mv.start, Some(mv.piece_moved));
    if mv.is_en_passant {
        board.set(mv.end, None);
        board.set(mv.capture_square(), mv.piece_captured);
    } else {
        board.set(mv.end, mv.piece_captured);
    }

    if mv.is_castle_move() {
        let (rook_from, rook_to) = castle_rook_squares(mv);
        let rook = board.get(rook_to);
        board.set(rook_to, None);
        board.set(rook_from, rook);
    }
}

/// Play `mv` and pass the turn. The move is trusted to be legal.
pub fn apply_move(game: &mut GameState, mv: Move) {
    apply_to_board(&mut game.board, &mv);

    let mover = mv.piece_moved;
    if mover.kind == PieceKind::King {
        game.king_locations[mover.color.index()] = mv.end;
    }

    let double_step =
        mover.kind == PieceKind::Pawn && mv.start.row().abs_diff(mv.end.row()) == 2;
    game.en_passant = double_step
        .then(|| Square::at(mv.start.col(), (mv.start.row() + mv.end.row()) / 2));

    game.castle_rights.revoke_for(&mv);
    game.castle_rights_log.push(game.castle_rights);
    game.en_passant_log.push(game.en_passant);
    game.move_log.push(mv);
    game.side_to_move = game.side_to_move.opposite();
}

/// Take back the last move. Returns `None` when there is nothing to undo.
pub fn revert_move(game: &mut GameState) -> Option<Move> {
    let mv = game.move_log.pop()?;
    revert_on_board(&mut game.board, &mv);

    let mover = mv.piece_moved;
    if mover.kind == PieceKind::King {
        game.king_locations[mover.color.index()] = mv.start;
    }

    game.castle_rights_log.pop();
    game.en_passant_log.pop();
    if let Some(&rights) = game.castle_rights_log.last() {
        game.castle_rights = rights;
    }
    if let Some(&target) = game.en_passant_log.last() {
        game.en_passant = target;
    }

    game.side_to_move = mover.color;
    game.check_mate = false;
    game.stale_mate = false;
    Some(mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn piece(code: &str) -> Piece {
        code.parse().expect("test piece should parse")
    }

    #[test]
    fn castling_moves_the_rook_and_reverts() {
        let mut board = Board::from_rows([
            "bR -- -- -- bK -- -- bR",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "-- -- -- -- -- -- -- --",
            "wR -- -- -- wK -- -- wR",
        ])
        .expect("board should parse");
        let before = board;

        let short = Move::new(sq("e1"), sq("g1"), piece("wK"), None);
        apply_to_board(&mut board, &short);
        assert_eq!(board.get(sq("f1")), Some(piece("wR")));
        assert_eq!(board.get(sq("g1")), Some(piece("wK")));
        assert!(board.is_empty(sq("h1")));
        revert_on_board(&mut board, &short);
        assert_eq!(board, before);

        let long = Move::new(sq("e8"), sq("c8"), piece("bK"), None);
        apply_to_board(&mut board, &long);
        assert_eq!(board.get(sq("d8")), Some(piece("bR")));
        assert!(board.is_empty(sq("a8")));
        revert_on_board(&mut board, &long);
        assert_eq!(board, before);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut board = Board::empty();
        board.set(sq("e5"), Some(piece("wp")));
        board.set(sq("d5"), Some(piece("bp")));
        let before = board;

        let mv = Move::en_passant(sq("e5"), sq("d6"), piece("wp"), piece("bp"));
        apply_to_board(&mut board, &mv);
        assert!(board.is_empty(sq("d5")));
        assert!(board.is_empty(sq("e5")));
        assert_eq!(board.get(sq("d6")), Some(piece("wp")));

        revert_on_board(&mut board, &mv);
        assert_eq!(board, before);
    }

    #[test]
    fn promotion_lands_a_queen_and_reverts_to_a_pawn() {
        let mut board = Board::empty();
        board.set(sq("b2"), Some(piece("bp")));
        board.set(sq("a1"), Some(piece("wN")));
        let before = board;

        let mv = Move::new(sq("b2"), sq("a1"), piece("bp"), Some(piece("wN")));
        apply_to_board(&mut board, &mv);
        assert_eq!(board.get(sq("a1")), Some(Piece::new(Color::Black, PieceKind::Queen)));

        revert_on_board(&mut board, &mv);
        assert_eq!(board, before);
    }

    #[test]
    fn game_level_apply_tracks_logs_and_reverts() {
        let mut game = GameState::new_game();
        let pawn = piece("wp");
        apply_move(&mut game, Move::new(sq("e2"), sq("e4"), pawn, None));
        assert_eq!(game.en_passant, Some(sq("e3")));
        assert_eq!(game.side_to_move, Color::Black);
        assert_eq!(game.move_log.len(), 1);
        assert_eq!(game.castle_rights_log.len(), 2);
        assert_eq!(game.en_passant_log.len(), 2);

        let undone = revert_move(&mut game).expect("one move to undo");
        assert_eq!(undone.to_string(), "e2e4");
        assert_eq!(game.en_passant, None);
        assert_eq!(game.side_to_move, Color::White);
        assert_eq!(game.board, Board::starting_position());
        assert!(revert_move(&mut game).is_none());
        assert_eq!(game.castle_rights_log.len(), 1);
    }
}
