//! Core game state: the board plus everything needed to generate, make and
//! take back moves.
//!
//! `GameState` owns the live `Board`, the side to move, cached king squares
//! and three history stacks that stay in lockstep: the move log, and the
//! castle-rights and en-passant logs, which each carry one extra entry for
//! the starting position. All probing during generation is pure, so a
//! `GameState` is never left half-updated across a public call. Mutation
//! needs `&mut self`; share a game between threads behind a lock.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::castle_rights::CastleRights;
use crate::game_state::chess_rules::{KING_HOME_COL, KING_SIDE_ROOK_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::square::Square;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_generator::{generate_legal_moves, LegalMoves};
use crate::move_generation::move_generator::PositionView;
use crate::move_generation::pins_and_checks::is_square_attacked;
use crate::moves::chess_move::Move;
use crate::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) move_log: Vec<Move>,
    pub(crate) castle_rights_log: Vec<CastleRights>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    /// Indexed by `Color::index`.
    pub(crate) king_locations: [Square; 2],
    pub(crate) en_passant: Option<Square>,
    pub(crate) castle_rights: CastleRights,
    pub(crate) check_mate: bool,
    pub(crate) stale_mate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, white to move, all castling rights.
    pub fn new_game() -> Self {
        let board = Board::starting_position();
        let rights = CastleRights::all();
        Self {
            board,
            side_to_move: Color::White,
            move_log: Vec::new(),
            castle_rights_log: vec![rights],
            en_passant_log: vec![None],
            king_locations: [
                Square::at(KING_HOME_COL, Color::White.home_row()),
                Square::at(KING_HOME_COL, Color::Black.home_row()),
            ],
            en_passant: None,
            castle_rights: rights,
            check_mate: false,
            stale_mate: false,
        }
    }

    /// Set up an arbitrary position.
    ///
    /// Each side needs exactly one king, no pawn may stand on a back rank and
    /// the side that just moved may not be left in check. Castle rights whose
    /// king or rook is off its home square are dropped. An en-passant target
    /// must sit directly behind an enemy pawn that could have just
    /// double-stepped.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        castle_rights: CastleRights,
        en_passant: Option<Square>,
    ) -> ChessResult<Self> {
        let white_king = board.unique_king_square(Color::White)?;
        let black_king = board.unique_king_square(Color::Black)?;

        if let Some((square, _)) = board
            .pieces()
            .find(|(sq, piece)| piece.kind == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7))
        {
            return Err(ChessError::InvalidBoardLayout(format!(
                "pawn on back rank at {square}"
            )));
        }

        let waiting = side_to_move.opposite();
        let waiting_king = match waiting {
            Color::White => white_king,
            Color::Black => black_king,
        };
        if is_square_attacked(&board, waiting, waiting_king) {
            return Err(ChessError::InvalidBoardLayout(format!(
                "{waiting} is in check but it is {side_to_move} to move"
            )));
        }

        if let Some(target) = en_passant {
            validate_en_passant_target(&board, side_to_move, target)?;
        }

        let rights = mask_castle_rights(&board, castle_rights);
        Ok(Self {
            board,
            side_to_move,
            move_log: Vec::new(),
            castle_rights_log: vec![rights],
            en_passant_log: vec![en_passant],
            king_locations: [white_king, black_king],
            en_passant,
            castle_rights: rights,
            check_mate: false,
            stale_mate: false,
        })
    }

    /// Read-only view of the live board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Independent copy of the board.
    #[inline]
    pub fn board_snapshot(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        self.king_locations[color.index()]
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Number of moves made since construction.
    #[inline]
    pub fn ply(&self) -> usize {
        self.move_log.len()
    }

    /// Whether the side to move is in check.
    pub fn in_check(&self) -> bool {
        is_square_attacked(&self.board, self.side_to_move, self.king_location(self.side_to_move))
    }

    /// Set by [`get_valid_moves`](Self::get_valid_moves) and
    /// [`make_move`](Self::make_move); cleared by [`undo_move`](Self::undo_move).
    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.check_mate
    }

    /// See [`is_checkmate`](Self::is_checkmate).
    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stale_mate
    }

    fn view(&self) -> PositionView<'_> {
        PositionView {
            board: &self.board,
            side: self.side_to_move,
            king: self.king_location(self.side_to_move),
            en_passant: self.en_passant,
            castle_rights: self.castle_rights,
        }
    }

    /// Legal moves for the side to move, without touching any state.
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves(&self.view()).moves
    }

    /// Legal moves for the side to move. Also refreshes the checkmate and
    /// stalemate flags.
    pub fn get_valid_moves(&mut self) -> Vec<Move> {
        let LegalMoves { moves, in_check } = generate_legal_moves(&self.view());
        self.check_mate = moves.is_empty() && in_check;
        self.stale_mate = moves.is_empty() && !in_check;
        moves
    }

    /// Play the legal move with `mv`'s origin and destination. The engine's
    /// own copy of the move is applied and returned, so callers only need
    /// the coordinates right.
    pub fn make_move(&mut self, mv: &Move) -> ChessResult<Move> {
        self.try_move(mv.start, mv.end)
    }

    /// Play the legal move from `start` to `end`, or reject it with
    /// [`ChessError::IllegalMove`] leaving the game untouched.
    pub fn try_move(&mut self, start: Square, end: Square) -> ChessResult<Move> {
        let chosen = self
            .legal_moves()
            .into_iter()
            .find(|candidate| candidate.connects(start, end))
            .ok_or_else(|| ChessError::IllegalMove(format!("{start}{end}")))?;

        apply_move(self, chosen);
        self.get_valid_moves();
        Ok(chosen)
    }

    /// Take back the last move. A no-op returning `None` on an empty history.
    pub fn undo_move(&mut self) -> Option<Move> {
        revert_move(self)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}

fn mask_castle_rights(board: &Board, requested: CastleRights) -> CastleRights {
    let mut rights = requested;
    for color in [Color::White, Color::Black] {
        let row = color.home_row();
        let holds = |col: u8, kind: PieceKind| {
            board.get(Square::at(col, row)) == Some(Piece::new(color, kind))
        };
        if !holds(KING_HOME_COL, PieceKind::King) {
            rights.revoke_all(color);
        }
        if !holds(KING_SIDE_ROOK_COL, PieceKind::Rook) {
            rights.revoke_king_side(color);
        }
        if !holds(QUEEN_SIDE_ROOK_COL, PieceKind::Rook) {
            rights.revoke_queen_side(color);
        }
    }
    rights
}

fn validate_en_passant_target(board: &Board, side_to_move: Color, target: Square) -> ChessResult<()> {
    let mover = side_to_move.opposite();
    let expected_row = mover.pawn_start_row() as i8 + mover.pawn_step();
    let pawn_square = target.offset(0, mover.pawn_step());
    let pawn_in_place = pawn_square
        .and_then(|sq| board.get(sq))
        .is_some_and(|piece| piece.is(mover, PieceKind::Pawn));

    if target.row() as i8 != expected_row || !board.is_empty(target) || !pawn_in_place {
        return Err(ChessError::InvalidBoardLayout(format!(
            "{target} is not a valid en-passant target"
        )));
    }
    Ok(())
}
