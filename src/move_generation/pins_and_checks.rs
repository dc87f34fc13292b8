//! Pin and check detection by ray casting from the king.
//!
//! Everything here is a pure function of the board: nothing is relocated
//! or flipped while probing, so hypothetical king squares and castling
//! transit squares are evaluated by passing a different `king_square`.
//!
//! The side's own king is transparent along rays. This keeps a king that
//! steps backwards along a checking line from "hiding" behind its old square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::legal_move_shared::{
    is_orthogonal, Direction, KNIGHT_OFFSETS, RAY_DIRECTIONS,
};

/// A square plus the outward direction from the king.
///
/// For a pin, `square` holds the pinned allied piece and `direction` points
/// from the king through it towards the pinner. For a check, `square` holds
/// the checking piece and `direction` is the ray (or knight jump) from the
/// king to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinOrCheck {
    pub square: Square,
    pub direction: Direction,
}

impl PinOrCheck {
    #[inline]
    pub const fn new(square: Square, direction: Direction) -> Self {
        Self { square, direction }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinsAndChecks {
    pub in_check: bool,
    pub pins: Vec<PinOrCheck>,
    pub checks: Vec<PinOrCheck>,
}

/// Scan outward from `king_square` for pins on and checks against `side`.
pub fn pins_and_checks(board: &Board, side: Color, king_square: Square) -> PinsAndChecks {
    let enemy = side.opposite();
    let mut result = PinsAndChecks::default();

    for direction in RAY_DIRECTIONS {
        let mut possible_pin: Option<PinOrCheck> = None;
        let mut cursor = king_square;
        let mut distance = 0u8;

        while let Some(square) = cursor.offset(direction.0, direction.1) {
            cursor = square;
            distance += 1;

            let Some(piece) = board.get(square) else {
                continue;
            };

            if piece.color == side {
                if piece.kind == PieceKind::King {
                    continue;
                }
                if possible_pin.is_some() {
                    // Second allied piece: nothing can reach the king this way.
                    break;
                }
                possible_pin = Some(PinOrCheck::new(square, direction));
                continue;
            }

            if attacks_along_ray(piece.kind, enemy, direction, distance) {
                match possible_pin {
                    Some(pin) => result.pins.push(pin),
                    None => {
                        result.in_check = true;
                        result.checks.push(PinOrCheck::new(square, direction));
                    }
                }
            }
            break;
        }
    }

    for jump in KNIGHT_OFFSETS {
        let Some(square) = king_square.offset(jump.0, jump.1) else {
            continue;
        };
        if board
            .get(square)
            .is_some_and(|piece| piece.is(enemy, PieceKind::Knight))
        {
            result.in_check = true;
            result.checks.push(PinOrCheck::new(square, jump));
        }
    }

    result
}

/// Whether an enemy piece of `kind`, found `distance` squares from the king
/// in `direction`, attacks back along that ray.
fn attacks_along_ray(kind: PieceKind, enemy: Color, direction: Direction, distance: u8) -> bool {
    let orthogonal = is_orthogonal(direction);
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => orthogonal,
        PieceKind::Bishop => !orthogonal,
        PieceKind::King => distance == 1,
        // The pawn must sit one diagonal step "behind" the king relative to
        // its own direction of travel.
        PieceKind::Pawn => distance == 1 && !orthogonal && direction.1 == -enemy.pawn_step(),
        PieceKind::Knight => false,
    }
}

/// Whether any piece of `defender`'s opponent attacks `square`.
///
/// `defender`'s own pieces block rays; its king does not.
#[inline]
pub fn is_square_attacked(board: &Board, defender: Color, square: Square) -> bool {
    pins_and_checks(board, defender, square).in_check
}

/// Whether `color`'s king stands attacked. A board with no such king is
/// reported as not in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_square_attacked(board, color, king))
}
