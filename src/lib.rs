//! Crate root module declarations for the mailbox chess rules engine.
//!
//! Exposes the position model (board, squares, castle rights, game state),
//! the move record, move generation with its pin/check analysis and perft
//! tooling, and small utilities for coordinates, rendering and seeded
//! random games.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod castle_rights;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod square;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_castle;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
    pub mod pins_and_checks;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_playout;
    pub mod render_game_state;
}
