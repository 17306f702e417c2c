//! # Position - Authoritative Game State
//!
//! ## Overview
//!
//! [`Position`] owns the single copy of the board plus everything the rules
//! need beyond piece placement:
//!
//! 1. **Side to move** and **king squares** (cached, updated by apply/undo)
//! 2. **En-passant target**: the square a pawn just skipped with a double push
//! 3. **Castling rights** and their per-ply history
//! 4. **Move log**: every applied [`Move`], oldest first
//! 5. **Terminal flags**: checkmate / stalemate, set by legal generation
//!
//! ## History Stacks
//!
//! Castling rights and en-passant targets are kept as stacks with one entry per
//! applied move plus the initial entry, so at all times
//!
//! ```text
//! castling_rights_log.len() == en_passant_log.len() == move_log.len() + 1
//! ```
//!
//! Undo pops one entry from each and reinstates the new top, which restores the
//! pre-move values exactly without re-deriving them from the move list.
//!
//! ## Submodules
//!
//! - `make_unmake` - [`Position::apply`] and [`Position::undo`]
//! - `legal` - [`Position::legal_moves`], check and attack queries
//!
//! ## Lifecycle
//!
//! One `Position` per game, created by [`Position::new`]. Resetting means
//! dropping it and creating another; there is no in-place rewind other than
//! repeated [`Position::undo`].

mod legal;
mod make_unmake;


use crate::board::*;
use crate::chess_move::Move;
use crate::constants::KING_START_COL;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::attack::find_king;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    turn: Color,
    white_king: Square,
    black_king: Square,
    en_passant: Option<Square>,
    castling_rights: CastlingRights,
    castling_rights_log: Vec<CastlingRights>,
    en_passant_log: Vec<Option<Square>>,
    move_log: Vec<Move>,
    checkmate: bool,
    stalemate: bool,
}

impl Position {
    /// Standard starting position, White to move
    pub fn new() -> Self {
        let board = init_board();
        Position {
            board,
            turn: Color::White,
            white_king: Square::new(Color::White.home_row(), KING_START_COL),
            black_king: Square::new(Color::Black.home_row(), KING_START_COL),
            en_passant: None,
            castling_rights: CastlingRights::ALL,
            castling_rights_log: vec![CastlingRights::ALL],
            en_passant_log: vec![None],
            move_log: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        piece_at(&self.board, square)
    }

    pub fn is_empty(&self, square: Square) -> bool {
        is_empty(&self.board, square)
    }

    /// Colour to move
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn white_to_move(&self) -> bool {
        self.turn == Color::White
    }

    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Rights in effect before the first move, then after each applied move
    pub fn castling_rights_log(&self) -> &[CastlingRights] {
        &self.castling_rights_log
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Number of plies applied since the position was created
    pub fn ply(&self) -> usize {
        self.move_log.len()
    }

    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Reset both terminal flags
    ///
    /// The flags are sticky: [`legal_moves`](Self::legal_moves) only ever sets
    /// them. Callers clear them after undo.
    pub fn clear_terminal_flags(&mut self) {
        self.checkmate = false;
        self.stalemate = false;
    }

    /// Plain-text diagram of the board, rank 8 on top
    pub fn diagram(&self) -> String {
        render_board(&self.board)
    }

    fn set_king_square(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king = square,
            Color::Black => self.black_king = square,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.diagram())
    }
}

/// Assemble a position from a piece list
///
/// Intended for fixtures (endgames, stalemates, en-passant setups). Starts from
/// an empty board, White to move, no castling rights and no en-passant target.
///
/// # Examples
///
/// ```rust,ignore
/// let position = PositionBuilder::new()
///     .piece("h8", Piece::new(Color::Black, PieceKind::King))?
///     .piece("f7", Piece::new(Color::White, PieceKind::King))?
///     .piece("g6", Piece::new(Color::White, PieceKind::Queen))?
///     .side_to_move(Color::Black)
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct PositionBuilder {
    board: Board,
    turn: Color,
    castling_rights: CastlingRights,
    en_passant: Option<Square>,
}

impl PositionBuilder {
    pub fn new() -> Self {
        PositionBuilder {
            board: EMPTY_BOARD,
            turn: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant: None,
        }
    }

    /// Place `piece` on an algebraic square such as `e1`
    pub fn piece(self, square: &str, piece: Piece) -> ChessEngineResult<Self> {
        Ok(self.place(Square::from_algebraic(square)?, piece))
    }

    /// Place `piece` on `square`, replacing whatever was there
    pub fn place(mut self, square: Square, piece: Piece) -> Self {
        set_piece(&mut self.board, square, Some(piece));
        self
    }

    pub fn side_to_move(mut self, color: Color) -> Self {
        self.turn = color;
        self
    }

    pub fn castling_rights(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    pub fn en_passant(mut self, square: Option<Square>) -> Self {
        self.en_passant = square;
        self
    }

    /// Validate and produce the position
    ///
    /// # Errors
    ///
    /// [`ChessEngineError::InvalidSetup`] unless each colour has exactly one
    /// king.
    pub fn build(self) -> ChessEngineResult<Position> {
        for color in [Color::White, Color::Black] {
            let kings = all_squares()
                .filter(|sq| matches!(piece_at(&self.board, *sq), Some(p) if p.is(color, PieceKind::King)))
                .count();
            if kings != 1 {
                return Err(ChessEngineError::InvalidSetup {
                    message: format!("{color} has {kings} kings, expected exactly one"),
                });
            }
        }

        let (Some(white_king), Some(black_king)) = (
            find_king(&self.board, Color::White),
            find_king(&self.board, Color::Black),
        ) else {
            return Err(ChessEngineError::InvalidSetup {
                message: "king not found".to_string(),
            });
        };

        Ok(Position {
            board: self.board,
            turn: self.turn,
            white_king,
            black_king,
            en_passant: self.en_passant,
            castling_rights: self.castling_rights,
            castling_rights_log: vec![self.castling_rights],
            en_passant_log: vec![self.en_passant],
            move_log: Vec::new(),
            checkmate: false,
            stalemate: false,
        })
    }
}

impl Default for PositionBuilder {
    fn default() -> Self {
        PositionBuilder::new()
    }
}
