//! Game state queries
//!
//! Functions for querying whether the game is still in progress.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Status of the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// At least one legal move, not in check
    Playing,
    /// At least one legal move, in check
    Check,
    /// No legal moves, in check
    Checkmate,
    /// No legal moves, not in check
    Stalemate,
}

impl GameState {
    /// Checkmate or stalemate
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Checkmate | GameState::Stalemate)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GameState::Playing => "playing",
            GameState::Check => "check",
            GameState::Checkmate => "checkmate",
            GameState::Stalemate => "stalemate",
        })
    }
}

/// Get current game state (playing, check, checkmate, stalemate)
///
/// Regenerates legal moves, so the position's terminal flags are refreshed as
/// a side effect.
pub fn get_game_state(position: &mut Position) -> GameState {
    let has_legal_moves = !position.legal_moves().is_empty();
    let in_check = position.in_check();

    match (has_legal_moves, in_check) {
        (true, false) => GameState::Playing,
        (true, true) => GameState::Check,
        (false, true) => GameState::Checkmate,
        (false, false) => GameState::Stalemate,
    }
}
