//! Public API for the chess engine
//!
//! Thin functions over [`Position`](crate::position::Position) for front ends
//! that work with squares and text rather than [`Move`](crate::Move) values.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Checked move execution and undo (play_move, play_notation, undo_move)
//! - `state` - Game state queries (get_game_state)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game};
pub use moves::{find_legal_move, play_move, play_notation, undo_move};
pub use state::{get_game_state, GameState};
