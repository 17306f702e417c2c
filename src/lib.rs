//! Text front end for the `chess_engine` rules crate
//!
//! - [`core`] - errors, settings persistence, logging setup
//! - [`game`] - two-click session, board rendering, command parsing

pub mod core;
pub mod game;
