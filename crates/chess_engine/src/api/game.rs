//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use tracing::debug;

use crate::position::Position;

/// Create a new game with initial position
pub fn new_game() -> Position {
    Position::new()
}

/// Reset the game to starting position
///
/// Replaces the position wholesale; move log, rights history and terminal
/// flags all start over.
pub fn reset_game(position: &mut Position) {
    debug!(discarded_plies = position.ply(), "[ENGINE] reset game");
    *position = Position::new();
}
