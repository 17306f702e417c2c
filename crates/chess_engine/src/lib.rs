//! # Chess Engine - Rules Core
//!
//! ## Overview
//!
//! A two-player chess rules engine. It holds the authoritative board, generates
//! every legal move for the side to move, applies and reverses moves, and
//! detects checkmate and stalemate. There is no search, evaluation, clock or
//! notation import: callers decide which move to play.
//!
//! ## Module Organization
//!
//! ### Core Data
//! - **`types`** - colours, pieces, squares, board grid, castling rights
//! - **`constants`** - direction vectors, castling files, starting layout
//! - **`board`** - board queries and text diagrams
//! - **`chess_move`** - [`Move`], an immutable record of one ply
//!
//! ### Rules
//! - **`move_gen`** - pseudo-legal generation per piece, castling, attacks
//! - **`position`** - [`Position`]: apply, undo, legal moves, check, terminal flags
//! - **`perft`** - move-path counting for validating the generator
//!
//! ### Facade
//! - **`api`** - `new_game()`, `play_move()`, `undo_move()`, `get_game_state()`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chess_engine::{Position, Move, Square};
//!
//! let mut position = Position::new();
//! let legal = position.legal_moves();
//! assert_eq!(legal.len(), 20);
//!
//! // a front end builds a candidate from two clicked squares...
//! let candidate = Move::new(Square::new(6, 4), Square::new(4, 4), position.board());
//! // ...and only ever applies the generator's equal copy
//! if let Some(mv) = legal.iter().find(|m| **m == candidate) {
//!     position.apply(*mv);
//! }
//! ```
//!
//! ## Threading
//!
//! Single-threaded and synchronous. [`Position::legal_moves`] temporarily
//! applies and undoes moves, so it takes `&mut self`; share a position across
//! threads only behind external synchronisation.

pub mod api;
pub mod board;
pub mod chess_move;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod perft;
pub mod position;
pub mod types;

pub use api::GameState;
pub use chess_move::Move;
pub use error::{ChessEngineError, ChessEngineResult};
pub use position::{Position, PositionBuilder};
pub use types::{Board, CastlingRights, Color, Piece, PieceKind, Square};
