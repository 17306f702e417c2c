//! Move making and unmaking
//!
//! [`Position::apply`] trusts its argument: legality is decided by
//! [`Position::legal_moves`] and never re-checked here. Applying a move that
//! did not come from the current legal set corrupts the position silently.
//!
//! [`Position::undo`] reverses the last applied move exactly, including
//! promotions (the move records the pawn as `piece_moved`), castling (the rook
//! goes home) and en passant (the captured pawn reappears beside the capturer).

use tracing::{trace, warn};

use super::Position;
use crate::board::*;
use crate::chess_move::Move;
use crate::constants::*;
use crate::types::*;

impl Position {
    /// Play `mv` on the board
    ///
    /// # Effects, in order
    ///
    /// 1. Clear the origin, place the moved piece on the destination
    /// 2. Append to the move log, update the king cache, flip the turn
    /// 3. Promotion: the pawn becomes a queen
    /// 4. En passant: remove the captured pawn beside the destination
    /// 5. Recompute the en-passant target
    /// 6. Castling: bring the rook across
    /// 7. Update castling rights and push both history stacks
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let mut position = Position::new();
    /// let e4 = position
    ///     .legal_moves()
    ///     .into_iter()
    ///     .find(|m| m.notation() == "e2e4")
    ///     .unwrap();
    /// position.apply(e4);
    /// assert_eq!(position.en_passant(), Some(Square::new(5, 4)));
    /// ```
    pub fn apply(&mut self, mv: Move) {
        let Some(piece) = mv.piece_moved() else {
            warn!("[POSITION] Ignoring {mv}: no piece on the origin square");
            return;
        };
        let (from, to) = (mv.from(), mv.to());

        set_piece(&mut self.board, from, None);
        set_piece(&mut self.board, to, Some(piece));
        self.move_log.push(mv);

        if piece.kind == PieceKind::King {
            self.set_king_square(piece.color, to);
        }
        self.turn = self.turn.opponent();

        if let Some(promoted) = mv.promotion_piece() {
            set_piece(&mut self.board, to, Some(promoted));
        }

        if mv.is_en_passant() {
            set_piece(&mut self.board, mv.en_passant_victim(), None);
        }

        self.en_passant = if mv.is_double_pawn_push() {
            Some(Square::new((from.row + to.row) / 2, from.col))
        } else {
            None
        };

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = piece_at(&self.board, rook_from);
            set_piece(&mut self.board, rook_to, rook);
            set_piece(&mut self.board, rook_from, None);
        }

        self.update_castling_rights(&mv, piece);
        self.castling_rights_log.push(self.castling_rights);
        self.en_passant_log.push(self.en_passant);

        trace!(ply = self.move_log.len(), "[POSITION] apply {mv}");
    }

    /// Take back the last applied move, returning it
    ///
    /// A no-op returning `None` when the log is empty. Terminal flags are left
    /// alone; see [`Position::clear_terminal_flags`].
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;
        let (from, to) = (mv.from(), mv.to());

        set_piece(&mut self.board, from, mv.piece_moved());
        set_piece(&mut self.board, to, mv.piece_captured());

        if let Some(piece) = mv.piece_moved() {
            if piece.kind == PieceKind::King {
                self.set_king_square(piece.color, from);
            }
        }
        self.turn = self.turn.opponent();

        if mv.is_en_passant() {
            // landing square was empty; the pawn sat beside the capturer
            set_piece(&mut self.board, to, None);
            set_piece(&mut self.board, mv.en_passant_victim(), mv.piece_captured());
        }

        self.en_passant_log.pop();
        self.en_passant = self.en_passant_log.last().copied().flatten();

        self.castling_rights_log.pop();
        if let Some(rights) = self.castling_rights_log.last() {
            self.castling_rights = *rights;
        }

        if mv.is_castle() {
            let (rook_home, rook_castled) = castle_rook_squares(&mv);
            let rook = piece_at(&self.board, rook_castled);
            set_piece(&mut self.board, rook_home, rook);
            set_piece(&mut self.board, rook_castled, None);
        }

        trace!(ply = self.move_log.len(), "[POSITION] undo {mv}");
        Some(mv)
    }

    /// Revoke rights lost by `mv`; rights are never restored going forward
    ///
    /// - a king move revokes both of that colour's rights
    /// - a rook leaving its home corner revokes that side's right
    /// - a capture landing on an enemy rook's home corner revokes the enemy's
    ///   right on that side
    fn update_castling_rights(&mut self, mv: &Move, piece: Piece) {
        match piece.kind {
            PieceKind::King => self.castling_rights.revoke_all(piece.color),
            PieceKind::Rook => revoke_for_corner(&mut self.castling_rights, mv.from(), piece.color),
            _ => {}
        }

        if let Some(captured) = mv.piece_captured() {
            if captured.kind == PieceKind::Rook {
                revoke_for_corner(&mut self.castling_rights, mv.to(), captured.color);
            }
        }
    }
}

fn revoke_for_corner(rights: &mut CastlingRights, square: Square, color: Color) {
    if square.row != color.home_row() {
        return;
    }
    match square.col {
        QUEENSIDE_ROOK_COL => rights.revoke_queenside(color),
        KINGSIDE_ROOK_COL => rights.revoke_kingside(color),
        _ => {}
    }
}

/// Rook's `(home, castled)` squares for a castling move
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.from().row;
    if mv.is_kingside_castle() {
        (
            Square::new(row, KINGSIDE_ROOK_COL),
            Square::new(row, KINGSIDE_ROOK_TARGET_COL),
        )
    } else {
        (
            Square::new(row, QUEENSIDE_ROOK_COL),
            Square::new(row, QUEENSIDE_ROOK_TARGET_COL),
        )
    }
}
