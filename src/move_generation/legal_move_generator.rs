//! Full legal move generation pipeline.
//!
//! One pin/check scan from the king drives everything:
//! - no check: every pseudo-legal move stands;
//! - single check: king moves, captures of the checker, and interpositions
//!   on the checking ray;
//! - double check: king moves only.
//!
//! Castling is appended only when not in check. En-passant captures are then
//! replayed on a scratch board, since removing two pawns from one rank can
//! expose the king in a way the pin scan cannot see.

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::square::Square;
use crate::move_generation::legal_move_apply::apply_to_board;
use crate::move_generation::legal_moves_castle::generate_castle_moves;
use crate::move_generation::move_generator::{generate_pseudo_legal_moves, PositionView};
use crate::move_generation::pins_and_checks::{is_square_attacked, pins_and_checks, PinOrCheck};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Default)]
pub struct LegalMoves {
    pub moves: Vec<Move>,
    pub in_check: bool,
}

pub fn generate_legal_moves(view: &PositionView<'_>) -> LegalMoves {
    let scan = pins_and_checks(view.board, view.side, view.king);
    let mut pins = scan.pins;
    let mut moves = Vec::with_capacity(64);
    generate_pseudo_legal_moves(view, &mut pins, &mut moves);

    match scan.checks.as_slice() {
        [] => generate_castle_moves(view, &mut moves),
        [check] => {
            let targets = check_resolution_squares(view.board, view.king, check);
            moves.retain(|mv| {
                mv.piece_moved.kind == PieceKind::King
                    || targets.contains(&mv.end)
                    || (mv.is_en_passant && mv.capture_square() == check.square)
            });
        }
        _ => moves.retain(|mv| mv.piece_moved.kind == PieceKind::King),
    }

    moves.retain(|mv| !mv.is_en_passant || en_passant_keeps_king_safe(view, mv));

    LegalMoves {
        moves,
        in_check: scan.in_check,
    }
}

/// Squares a non-king move may land on to answer `check`: the checker
/// itself, plus the open squares between it and the king for a slider.
fn check_resolution_squares(board: &Board, king: Square, check: &PinOrCheck) -> Vec<Square> {
    let knight_check = board
        .get(check.square)
        .is_some_and(|piece| piece.kind == PieceKind::Knight);
    if knight_check {
        return vec![check.square];
    }

    let mut squares = Vec::with_capacity(7);
    let mut cursor = king;
    while let Some(square) = cursor.offset(check.direction.0, check.direction.1) {
        squares.push(square);
        if square == check.square {
            break;
        }
        cursor = square;
    }
    squares
}

fn en_passant_keeps_king_safe(view: &PositionView<'_>, mv: &Move) -> bool {
    let mut scratch = *view.board;
    apply_to_board(&mut scratch, mv);
    !is_square_attacked(&scratch, view.side, view.king)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::castle_rights::CastleRights;
    use crate::game_state::chess_types::Color;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn legal(rows: [&str; 8], side: Color, en_passant: Option<&str>) -> LegalMoves {
        let board = Board::from_rows(rows).expect("board should parse");
        let view = PositionView {
            board: &board,
            side,
            king: board.king_square(side).expect("king present"),
            en_passant: en_passant.map(sq),
            castle_rights: CastleRights::none(),
        };
        generate_legal_moves(&view)
    }

    fn names(result: &LegalMoves) -> Vec<String> {
        let mut out: Vec<String> = result.moves.iter().map(|m| m.to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn single_check_allows_block_capture_and_king_steps() {
        let result = legal(
            [
                "-- -- -- -- bR -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- wp",
                "wR -- -- wB wK -- -- --",
            ],
            Color::White,
            None,
        );
        assert!(result.in_check);
        // Bishop interposes on e2, rook cannot reach the file, king steps aside.
        assert_eq!(
            names(&result),
            vec!["d1e2", "e1d2", "e1f1", "e1f2"]
        );
    }

    #[test]
    fn knight_check_cannot_be_blocked() {
        let result = legal(
            [
                "-- -- -- -- -- -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- bN -- -- -- --",
                "wp wp -- -- -- -- -- --",
                "-- -- wB -- wK -- -- --",
            ],
            Color::White,
            None,
        );
        assert!(result.in_check);
        let non_king: Vec<String> = result
            .moves
            .iter()
            .filter(|m| m.piece_moved.kind != PieceKind::King)
            .map(|m| m.to_string())
            .collect();
        assert!(non_king.is_empty());
    }

    #[test]
    fn double_check_leaves_only_king_moves() {
        let result = legal(
            [
                "-- -- -- -- bR -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- bB -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- wR wK -- -- --",
            ],
            Color::White,
            None,
        );
        assert!(result.in_check);
        assert!(result
            .moves
            .iter()
            .all(|m| m.piece_moved.kind == PieceKind::King));
        assert_eq!(names(&result), vec!["e1f1", "e1f2"]);
    }

    #[test]
    fn en_passant_may_capture_the_checking_pawn() {
        // d7-d5 gave check to the king on e4; exd6 removes the checker.
        let result = legal(
            [
                "-- -- -- -- -- -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- bp wp -- -- --",
                "-- -- -- -- wK -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
            ],
            Color::White,
            Some("d6"),
        );
        assert!(result.in_check);
        assert!(names(&result).contains(&"e5d6".to_owned()));
        assert!(!names(&result).contains(&"e5e6".to_owned()));
    }

    #[test]
    fn en_passant_that_exposes_the_king_on_the_rank_is_dropped() {
        let result = legal(
            [
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "wK -- -- bp wp -- -- bR",
                "-- -- -- -- -- -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
            ],
            Color::White,
            Some("d6"),
        );
        assert!(!result.in_check);
        let names = names(&result);
        assert!(!names.contains(&"e5d6".to_owned()));
        assert!(names.contains(&"e5e6".to_owned()));
    }

    #[test]
    fn pinned_piece_moves_only_along_the_pin() {
        let result = legal(
            [
                "-- -- -- -- -- -- -- bK",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- bB -- -- -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- wQ -- -- -- --",
                "-- -- -- -- -- -- -- --",
                "-- -- -- -- -- wK -- --",
            ],
            Color::White,
            None,
        );
        let queen: Vec<String> = result
            .moves
            .iter()
            .filter(|m| m.piece_moved.kind == PieceKind::Queen)
            .map(|m| m.to_string())
            .collect();
        let mut queen = queen;
        queen.sort();
        assert_eq!(queen, vec!["d3b5", "d3c4", "d3e2"]);
    }
}
