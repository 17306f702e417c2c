//! # Chess Engine Constants - Geometry & Starting Layout
//!
//! ## Direction Vectors
//!
//! Movement is expressed as `(d_row, d_col)` steps in the engine frame, where
//! row 0 is rank 8. "North" (toward Black's side) is therefore `d_row = -1`.
//!
//! - **Rook rays**: the four orthogonal steps
//! - **Bishop rays**: the four diagonal steps
//! - **Queen**: both sets
//! - **Knight**: the eight `{±1, ±2}` L-shapes, taken once each
//! - **King**: the eight adjacent squares, taken once each
//!
//! Keeping the steps as signed pairs (rather than 0..63 index deltas) means
//! board-edge wrapping never has to be detected after the fact:
//! [`Square::offset`](crate::types::Square::offset) simply returns `None`.
//!
//! ## Castling Files
//!
//! Kings start on file `e` (column 4). Kingside castling moves the king two
//! files right and the rook from column 7 to column 5; queenside moves the
//! king two files left and the rook from column 0 to column 3.

use crate::types::PieceKind;

/// Squares per side of the board
pub const BOARD_SIZE: usize = 8;

/// Orthogonal steps: up, left, down, right
pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Diagonal steps
pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// L-shaped knight jumps
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Adjacent squares reachable by a king
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Column of both kings at the start
pub const KING_START_COL: u8 = 4;

/// Kingside rook: home column and post-castle column
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const KINGSIDE_ROOK_TARGET_COL: u8 = 5;

/// Queenside rook: home column and post-castle column
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const QUEENSIDE_ROOK_TARGET_COL: u8 = 3;

/// Back-rank order from the a-file to the h-file
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Upper bound on legal moves in any reachable position, used to size buffers
pub const MAX_MOVES: usize = 218;
