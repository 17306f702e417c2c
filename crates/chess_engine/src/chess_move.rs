//! # Move - One Ply as an Immutable Value
//!
//! A [`Move`] records origin, destination, the piece that moved and the piece
//! it captured, plus the special-move flags (promotion, en passant, castle).
//!
//! ## Snapshot Semantics
//!
//! `piece_moved` and `piece_captured` are read from the board at construction
//! time and never recomputed. A move stays valid evidence of the position it
//! was played from, which is exactly what undo needs.
//!
//! ## Identity
//!
//! Two moves are equal iff their `(from, to)` geometry matches, encoded as
//!
//! ```text
//! id = from.row * 1000 + from.col * 100 + to.row * 10 + to.col
//! ```
//!
//! Flags and piece fields are not part of identity. This lets a front end build
//! a "candidate" from two clicked squares and find the generator's version of
//! the same move (with the correct castle / en-passant flags) by `==`.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::board::piece_at;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: Option<Piece>,
    piece_captured: Option<Piece>,
    is_promotion: bool,
    is_en_passant: bool,
    is_castle: bool,
    id: u16,
}

impl Move {
    /// Ordinary move or capture, read against `board`
    pub fn new(from: Square, to: Square, board: &Board) -> Self {
        Self::build(from, to, board, false, false)
    }

    /// En-passant capture. The captured pawn is the opposing pawn, whatever
    /// occupies `to` (normally nothing).
    pub fn en_passant(from: Square, to: Square, board: &Board) -> Self {
        Self::build(from, to, board, true, false)
    }

    /// King's two-square castling step; the rook follows on apply
    pub fn castle(from: Square, to: Square, board: &Board) -> Self {
        Self::build(from, to, board, false, true)
    }

    fn build(from: Square, to: Square, board: &Board, is_en_passant: bool, is_castle: bool) -> Self {
        let piece_moved = piece_at(board, from);
        let mut piece_captured = piece_at(board, to);

        let is_promotion = matches!(
            piece_moved,
            Some(p) if p.kind == PieceKind::Pawn && to.row == p.color.promotion_row()
        );

        if is_en_passant {
            piece_captured = piece_moved.map(|p| Piece::new(p.color.opponent(), PieceKind::Pawn));
        }

        Move {
            from,
            to,
            piece_moved,
            piece_captured,
            is_promotion,
            is_en_passant,
            is_castle,
            id: Self::encode(from, to),
        }
    }

    #[inline]
    fn encode(from: Square, to: Square) -> u16 {
        from.row as u16 * 1000 + from.col as u16 * 100 + to.row as u16 * 10 + to.col as u16
    }

    /// Parse `e2e4` into a candidate read against `board`
    pub fn from_notation(text: &str, board: &Board) -> ChessEngineResult<Self> {
        let text = text.trim();
        if text.len() != 4 || !text.is_ascii() {
            return Err(ChessEngineError::InvalidNotation {
                input: text.to_string(),
            });
        }

        let from = Square::from_algebraic(&text[..2])?;
        let to = Square::from_algebraic(&text[2..])?;
        Ok(Move::new(from, to, board))
    }

    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    pub fn piece_moved(&self) -> Option<Piece> {
        self.piece_moved
    }

    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    pub fn is_promotion(&self) -> bool {
        self.is_promotion
    }

    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    pub fn is_castle(&self) -> bool {
        self.is_castle
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    /// Square of the pawn removed by an en-passant capture
    pub fn en_passant_victim(&self) -> Square {
        Square::new(self.from.row, self.to.col)
    }

    /// Castling toward the h-file
    pub fn is_kingside_castle(&self) -> bool {
        self.is_castle && self.to.col > self.from.col
    }

    /// A pawn advancing two rows
    pub fn is_double_pawn_push(&self) -> bool {
        matches!(self.piece_moved, Some(p) if p.kind == PieceKind::Pawn)
            && self.from.row.abs_diff(self.to.row) == 2
    }

    /// Piece that lands on `to` after a promotion; always a queen
    pub fn promotion_piece(&self) -> Option<Piece> {
        if !self.is_promotion {
            return None;
        }
        self.piece_moved
            .map(|p| Piece::new(p.color, PieceKind::Queen))
    }

    /// Coordinate notation, e.g. `e2e4`
    pub fn notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{init_board, set_piece, EMPTY_BOARD};

    #[test]
    fn test_move_snapshots_pieces() {
        //! Piece fields are captured at construction and survive board changes
        let mut board = init_board();
        let mv = Move::new(Square::new(6, 4), Square::new(4, 4), &board);

        set_piece(&mut board, Square::new(6, 4), None);

        assert_eq!(
            mv.piece_moved(),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(mv.piece_captured(), None);
        assert_eq!(mv.notation(), "e2e4");
        assert!(mv.is_double_pawn_push());
    }

    #[test]
    fn test_move_equality_is_geometric() {
        //! Flags and piece context do not participate in identity
        let board = init_board();
        let from = Square::new(7, 4);
        let to = Square::new(7, 6);

        let plain = Move::new(from, to, &board);
        let castle = Move::castle(from, to, &board);
        let candidate_on_empty = Move::new(from, to, &EMPTY_BOARD);

        assert_eq!(plain, castle);
        assert_eq!(plain, candidate_on_empty);
        assert_ne!(plain, Move::new(to, from, &board), "id is order sensitive");
        assert_eq!(castle.id(), 7476);
    }

    #[test]
    fn test_promotion_flag_derived() {
        let mut board = EMPTY_BOARD;
        set_piece(&mut board, Square::new(1, 0), Some(Piece::new(Color::White, PieceKind::Pawn)));
        set_piece(&mut board, Square::new(6, 7), Some(Piece::new(Color::Black, PieceKind::Pawn)));

        let white = Move::new(Square::new(1, 0), Square::new(0, 0), &board);
        let black = Move::new(Square::new(6, 7), Square::new(7, 7), &board);
        let not_yet = Move::new(Square::new(6, 7), Square::new(5, 7), &board);

        assert!(white.is_promotion());
        assert!(black.is_promotion());
        assert!(!not_yet.is_promotion());
        assert_eq!(
            white.promotion_piece(),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }

    #[test]
    fn test_en_passant_overrides_capture() {
        //! The destination is empty; the captured piece is the enemy pawn
        let mut board = EMPTY_BOARD;
        set_piece(&mut board, Square::new(3, 4), Some(Piece::new(Color::White, PieceKind::Pawn)));
        set_piece(&mut board, Square::new(3, 3), Some(Piece::new(Color::Black, PieceKind::Pawn)));

        let mv = Move::en_passant(Square::new(3, 4), Square::new(2, 3), &board);

        assert_eq!(
            mv.piece_captured(),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(mv.en_passant_victim(), Square::new(3, 3));
    }

    #[test]
    fn test_from_notation() {
        let board = init_board();
        let mv = Move::from_notation("g1f3", &board).unwrap();
        assert_eq!(mv.from(), Square::new(7, 6));
        assert_eq!(mv.to(), Square::new(5, 5));
        assert_eq!(mv.to_string(), "g1f3");

        assert!(matches!(
            Move::from_notation("g1f", &board),
            Err(ChessEngineError::InvalidNotation { .. })
        ));
        assert!(matches!(
            Move::from_notation("z1f3", &board),
            Err(ChessEngineError::InvalidSquare { .. })
        ));
    }
}
