//! Direction tables and helpers shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece};
use crate::game_state::square::Square;
use crate::move_generation::pins_and_checks::PinOrCheck;
use crate::moves::chess_move::Move;

/// A `(d_col, d_row)` step.
pub type Direction = (i8, i8);

/// Ray directions as `(d_col, d_row)`: indices 0..4 orthogonal, 4..8 diagonal.
pub const RAY_DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
];

pub const KING_OFFSETS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

#[inline]
pub const fn is_orthogonal(direction: Direction) -> bool {
    direction.0 == 0 || direction.1 == 0
}

/// Remove and return the pin direction for `square`. Each pin is consumed by
/// the single piece standing on its ray.
pub fn take_pin(pins: &mut Vec<PinOrCheck>, square: Square) -> Option<Direction> {
    let index = pins.iter().position(|pin| pin.square == square)?;
    Some(pins.swap_remove(index).direction)
}

/// Whether a step in `direction` keeps a piece on its pin axis. Unpinned
/// pieces may move anywhere.
#[inline]
pub fn along_pin(pin: Option<Direction>, direction: Direction) -> bool {
    match pin {
        None => true,
        Some((dc, dr)) => direction == (dc, dr) || direction == (-dc, -dr),
    }
}

/// Build a normal move, recording whatever stands on the destination.
#[inline]
pub fn quiet_or_capture(board: &Board, from: Square, to: Square, mover: Piece) -> Move {
    Move::new(from, to, mover, board.get(to))
}

/// Walk each direction from `from` until the edge, an own piece (excluded)
/// or an enemy piece (included).
pub fn generate_slider_moves(
    board: &Board,
    from: Square,
    mover: Piece,
    pin: Option<Direction>,
    directions: &[Direction],
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        if !along_pin(pin, direction) {
            continue;
        }
        let mut cursor = from;
        while let Some(to) = cursor.offset(direction.0, direction.1) {
            match board.color_at(to) {
                None => out.push(Move::new(from, to, mover, None)),
                Some(color) if color != mover.color => {
                    out.push(quiet_or_capture(board, from, to, mover));
                    break;
                }
                Some(_) => break,
            }
            cursor = to;
        }
    }
}

/// Whether `square` holds a piece of `color`.
#[inline]
pub fn occupied_by(board: &Board, square: Square, color: Color) -> bool {
    board.color_at(square) == Some(color)
}
