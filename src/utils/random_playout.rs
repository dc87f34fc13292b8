//! Seeded random games.
//!
//! Plays uniformly random legal moves until the game ends or a ply cap is
//! reached. The same seed always produces the same game, which makes the
//! playouts usable as fixtures for make/undo checks over many positions.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    PlyLimit,
}

#[derive(Debug, Clone)]
pub struct Playout {
    pub outcome: PlayoutOutcome,
    pub final_state: GameState,
    pub moves: Vec<Move>,
}

/// Random game from the starting position.
pub fn random_playout(seed: u64, max_plies: usize) -> ChessResult<Playout> {
    random_playout_from(GameState::new_game(), seed, max_plies)
}

/// Random game continuing from `state`.
pub fn random_playout_from(
    mut state: GameState,
    seed: u64,
    max_plies: usize,
) -> ChessResult<Playout> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut moves = Vec::new();

    for _ in 0..max_plies {
        let legal_moves = state.get_valid_moves();
        let Some(picked) = legal_moves.as_slice().choose(&mut rng) else {
            let outcome = if state.is_checkmate() {
                match state.side_to_move() {
                    Color::White => PlayoutOutcome::BlackWinCheckmate,
                    Color::Black => PlayoutOutcome::WhiteWinCheckmate,
                }
            } else {
                PlayoutOutcome::DrawStalemate
            };
            return Ok(Playout {
                outcome,
                final_state: state,
                moves,
            });
        };

        moves.push(state.make_move(picked)?);
    }

    let outcome = if state.is_checkmate() {
        match state.side_to_move() {
            Color::White => PlayoutOutcome::BlackWinCheckmate,
            Color::Black => PlayoutOutcome::WhiteWinCheckmate,
        }
    } else if state.is_stalemate() {
        PlayoutOutcome::DrawStalemate
    } else {
        PlayoutOutcome::PlyLimit
    };
    Ok(Playout {
        outcome,
        final_state: state,
        moves,
    })
}
