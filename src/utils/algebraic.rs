//! Square and move conversions for coordinate notation.
//!
//! Converts between human-readable coordinates (e.g., `e4`, `e2e4`) and the
//! internal `(col, row)` grid, where row 0 is rank 8.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::square::Square;

/// Convert coordinate notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Square::new(i32::from(file - b'a'), i32::from(b'8' - rank))
}

/// Convert a square to coordinate notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}

/// Split a coordinate move such as "e2e4" (an optional trailing promotion
/// letter is accepted and ignored) into its origin and destination squares.
pub fn parse_coordinate_move(text: &str) -> ChessResult<(Square, Square)> {
    let text = text.trim();
    if !(text.len() == 4 || text.len() == 5) || !text.is_ascii() {
        return Err(ChessError::InvalidAlgebraic(text.to_owned()));
    }
    let start = algebraic_to_square(&text[0..2])?;
    let end = algebraic_to_square(&text[2..4])?;
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, parse_coordinate_move, square_to_algebraic};
    use crate::chess_errors::ChessError;
    use crate::game_state::square::Square;

    #[test]
    fn round_trip_square_conversions() {
        let a1 = algebraic_to_square("a1").expect("a1 should parse");
        assert_eq!((a1.col(), a1.row()), (0, 7));
        let h8 = algebraic_to_square("h8").expect("h8 should parse");
        assert_eq!((h8.col(), h8.row()), (7, 0));
        assert_eq!(square_to_algebraic(a1), "a1");
        assert_eq!(square_to_algebraic(h8), "h8");
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert_eq!(
            algebraic_to_square("i1"),
            Err(ChessError::InvalidAlgebraic("i1".to_owned()))
        );
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("a").is_err());
        assert!(parse_coordinate_move("e2e").is_err());
    }

    #[test]
    fn parses_coordinate_moves() {
        let (start, end) = parse_coordinate_move("e2e4").expect("e2e4 should parse");
        assert_eq!(start, Square::new(4, 6).expect("e2 is on the board"));
        assert_eq!(end, Square::new(4, 4).expect("e4 is on the board"));
        assert!(parse_coordinate_move("e7e8q").is_ok());
    }
}
