//! Canonical chess-rule constants.
//!
//! Starting back-rank layout and the home columns used by castling.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::square::DIMENSION;

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; DIMENSION as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column of both kings at the start of the game (the e-file).
pub const KING_HOME_COL: u8 = 4;
/// Column of the queen-side rooks (the a-file).
pub const QUEEN_SIDE_ROOK_COL: u8 = 0;
/// Column of the king-side rooks (the h-file).
pub const KING_SIDE_ROOK_COL: u8 = 7;
