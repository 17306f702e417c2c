//! Error types for chess engine
//!
//! The rules core (`apply`, `undo`, `legal_moves`) is total over well-formed
//! input and never fails. These errors come from the boundary: parsing
//! coordinates, building fixture positions, and the checked
//! [`play_move`](crate::api::play_move) facade.

use thiserror::Error;

use crate::types::{Color, Square};

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Text that is not a square such as `e4`
    #[error("Invalid square: {input:?} (expected a file a-h followed by a rank 1-8)")]
    InvalidSquare { input: String },

    /// Text that is not a move such as `e2e4`
    #[error("Invalid move notation: {input:?} (expected four characters like e2e4)")]
    InvalidNotation { input: String },

    /// Candidate not present in the current legal-move set
    #[error("Illegal move: {notation}")]
    IllegalMove { notation: String },

    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Piece does not belong to the side to move
    #[error("Piece at square {square} does not belong to {color}")]
    WrongPieceColor { square: Square, color: Color },

    /// Fixture position that cannot be played from
    #[error("Invalid position setup: {message}")]
    InvalidSetup { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
