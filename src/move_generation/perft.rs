//! Perft: exhaustive move-path enumeration for validating the generator.
//!
//! Leaf counters follow the usual perft tables: a leaf is classified by the
//! move that reached it.

use std::thread;

use crate::chess_errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::moves::chess_move::Move;

/// "Kiwipete": castling, pins and en passant all reachable within two plies.
pub const KIWIPETE_ROWS: [&str; 8] = [
    "bR -- -- -- bK -- -- bR",
    "bp -- bp bp bQ bp bB --",
    "bB bN -- -- bp bN bp --",
    "-- -- -- wp wN -- -- --",
    "-- bp -- -- wp -- -- --",
    "-- -- wN -- -- wQ -- bp",
    "wp wp wp wB wB wp wp wp",
    "wR -- -- -- wK -- -- wR",
];

/// Sparse endgame with a horizontal en-passant pin on the fifth rank.
pub const POSITION_3_ROWS: [&str; 8] = [
    "-- -- -- -- -- -- -- --",
    "-- -- bp -- -- -- -- --",
    "-- -- -- bp -- -- -- --",
    "wK wp -- -- -- -- -- bR",
    "-- wR -- -- -- bp -- bK",
    "-- -- -- -- -- -- -- --",
    "-- -- -- -- wp -- wp --",
    "-- -- -- -- -- -- -- --",
];

/// Kiwipete with white to move and full castling rights.
pub fn kiwipete() -> ChessResult<GameState> {
    GameState::from_position(
        Board::from_rows(KIWIPETE_ROWS)?,
        Color::White,
        CastleRights::all(),
        None,
    )
}

/// Position 3 with white to move.
pub fn position_3() -> ChessResult<GameState> {
    GameState::from_position(
        Board::from_rows(POSITION_3_ROWS)?,
        Color::White,
        CastleRights::none(),
        None,
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count only.
pub fn perft_nodes(game_state: &GameState, depth: u8) -> usize {
    let mut game = game_state.clone();
    count_nodes(&mut game, depth)
}

fn count_nodes(game: &mut GameState, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }
    let moves = game.legal_moves();
    if depth == 1 {
        return moves.len();
    }

    let mut nodes = 0;
    for mv in moves {
        apply_move(game, mv);
        nodes += count_nodes(game, depth - 1);
        revert_move(game);
    }
    nodes
}

/// Leaf count plus per-leaf move classification.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    let mut game = game_state.clone();
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(&mut game, depth, &mut counts);
    counts
}

/// [`perft`] with one worker thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft(game_state, 0);
    }

    let root_moves = game_state.legal_moves();
    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .into_iter()
            .map(|mv| {
                let mut game = game_state.clone();
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    visit_leaf_or_descend(&mut game, mv, depth, &mut local);
                    local
                })
            })
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        total
    })
}

/// Node count below each root move, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, usize)> {
    let mut game = game_state.clone();
    let moves = game.legal_moves();
    moves
        .into_iter()
        .map(|mv| {
            apply_move(&mut game, mv);
            let nodes = count_nodes(&mut game, depth.saturating_sub(1));
            revert_move(&mut game);
            (mv, nodes)
        })
        .collect()
}

fn perft_recurse(game: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in game.legal_moves() {
        visit_leaf_or_descend(game, mv, depth, counts);
    }
}

fn visit_leaf_or_descend(game: &mut GameState, mv: Move, depth: u8, counts: &mut PerftCounts) {
    apply_move(game, mv);
    if depth == 1 {
        classify_leaf(game, &mv, counts);
    } else {
        perft_recurse(game, depth - 1, counts);
    }
    revert_move(game);
}

fn classify_leaf(game: &GameState, mv: &Move, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castle_move() {
        counts.castles += 1;
    }
    if mv.is_pawn_promotion() {
        counts.promotions += 1;
    }
    if game.in_check() {
        counts.checks += 1;
        if game.legal_moves().is_empty() {
            counts.checkmates += 1;
        }
    }
}
