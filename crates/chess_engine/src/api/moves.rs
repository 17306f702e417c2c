//! Move execution and validation
//!
//! Functions for executing moves checked against the legal-move set. This is
//! the contract a front end must follow: build a candidate from two squares,
//! find its equal in the current legal set, apply that generated move.

use tracing::debug;

use crate::board::piece_at;
use crate::chess_move::Move;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::position::Position;
use crate::types::*;

/// Find the generated move equal to `candidate` in `legal`
///
/// Returns the generator's copy, which carries the correct castle and
/// en-passant flags.
pub fn find_legal_move(legal: &[Move], candidate: &Move) -> Option<Move> {
    legal.iter().find(|mv| *mv == candidate).copied()
}

/// Execute a move from `from` to `to` if it is legal
///
/// # Arguments
///
/// * `position` - The game state
/// * `from` - Origin square
/// * `to` - Destination square
///
/// # Returns
///
/// The applied move, as generated (flags included).
///
/// # Errors
///
/// - [`ChessEngineError::NoPieceAtSquare`] if `from` is empty
/// - [`ChessEngineError::WrongPieceColor`] if `from` holds an opponent piece
/// - [`ChessEngineError::IllegalMove`] for any other move not in the legal set
///
/// # Examples
///
/// ```rust,ignore
/// // Move pawn from e2 to e4
/// let mv = play_move(&mut position, Square::new(6, 4), Square::new(4, 4))?;
/// assert_eq!(mv.notation(), "e2e4");
/// ```
pub fn play_move(position: &mut Position, from: Square, to: Square) -> ChessEngineResult<Move> {
    let candidate = Move::new(from, to, position.board());

    match piece_at(position.board(), from) {
        None => return Err(ChessEngineError::NoPieceAtSquare { square: from }),
        Some(piece) if piece.color != position.turn() => {
            return Err(ChessEngineError::WrongPieceColor {
                square: from,
                color: position.turn(),
            })
        }
        Some(_) => {}
    }

    let legal = position.legal_moves();
    let Some(mv) = find_legal_move(&legal, &candidate) else {
        return Err(ChessEngineError::IllegalMove {
            notation: candidate.notation(),
        });
    };

    position.apply(mv);
    debug!(ply = position.ply(), "[ENGINE] played {mv}");
    Ok(mv)
}

/// Execute a move given in coordinate notation, e.g. `e2e4`
pub fn play_notation(position: &mut Position, notation: &str) -> ChessEngineResult<Move> {
    let candidate = Move::from_notation(notation, position.board())?;
    play_move(position, candidate.from(), candidate.to())
}

/// Take back the last move and clear the terminal flags
///
/// Returns `None` (and changes nothing) when no move has been played.
pub fn undo_move(position: &mut Position) -> Option<Move> {
    let undone = position.undo()?;
    position.clear_terminal_flags();
    debug!(ply = position.ply(), "[ENGINE] undid {undone}");
    Some(undone)
}
