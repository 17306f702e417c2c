//! # Chess Engine Core Types
//!
//! ## Overview
//!
//! Value types shared by every other module: colours, piece kinds, squares,
//! the board grid and the castling-rights record.
//!
//! ## Coordinate Frame
//!
//! A [`Square`] is a `(row, col)` pair, both in `0..8`. Row 0 is rank 8 and
//! row 7 is rank 1, so White's pieces start on rows 6 and 7 and White pawns
//! advance toward row 0. Column 0 is the a-file.
//!
//! ```text
//!        col 0 ... col 7
//! row 0   a8  ...  h8     <- Black home row
//! row 7   a1  ...  h1     <- White home row
//! ```
//!
//! Front ends map their own coordinates (pixels, cells) into this frame before
//! calling the engine.
//!
//! ## Why `Option<Piece>` for Board Cells?
//!
//! An empty square is simply `None`. Colour and kind are separate enums, so
//! every `match` over a piece is checked for exhaustiveness by the compiler;
//! adding a new piece kind means extending [`PieceKind`] and fixing the match
//! arms the compiler points at.

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::error::{ChessEngineError, ChessEngineResult};

/// The 8x8 grid, indexed `board[row][col]`.
pub type Board = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

/// Side colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step
    #[inline]
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this colour's king and rooks at the start
    #[inline]
    pub fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row from which a pawn may advance two squares
    #[inline]
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Farthest row, where pawns promote
    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind, independent of colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase letter used in diagrams (`P`, `N`, `B`, `R`, `Q`, `K`)
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A coloured piece occupying a square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// Diagram letter: uppercase for White, lowercase for Black
    pub fn symbol(self) -> char {
        let symbol = self.kind.symbol();
        match self.color {
            Color::White => symbol,
            Color::Black => symbol.to_ascii_lowercase(),
        }
    }
}

/// A board coordinate in the engine frame (see module docs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square. Callers guarantee `row < 8 && col < 8`.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Square { row, col }
    }

    /// Checked constructor for untrusted coordinates
    pub fn try_new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Step by `(d_row, d_col)`; `None` when the result leaves the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// File letter, `a` for column 0
    #[inline]
    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank digit, `8` for row 0
    #[inline]
    pub fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Parse algebraic text such as `e2`
    pub fn from_algebraic(text: &str) -> ChessEngineResult<Self> {
        let invalid = || ChessEngineError::InvalidSquare {
            input: text.to_string(),
        };

        let bytes = text.trim().as_bytes();
        let [file, rank] = bytes else {
            return Err(invalid());
        };

        let file = file.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
            return Err(invalid());
        }

        Ok(Square::new(b'8' - rank, file - b'a'))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl std::str::FromStr for Square {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

/// Castling availability for both sides
///
/// Rights only ever go from `true` to `false` along a line of play. Undo
/// restores them from the per-ply history kept by
/// [`Position`](crate::position::Position).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn revoke_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    pub fn revoke_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke_kingside(color);
        self.revoke_queenside(color);
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_algebraic_mapping() {
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 7).to_string(), "h1");
        assert_eq!(Square::new(6, 4).to_string(), "e2");
        assert_eq!(Square::from_algebraic("e4").unwrap(), Square::new(4, 4));
        assert_eq!("H8".parse::<Square>().unwrap(), Square::new(0, 7));
    }

    #[test]
    fn test_square_rejects_bad_text() {
        for bad in ["", "e", "e9", "i1", "e22", "4e"] {
            assert!(
                matches!(
                    Square::from_algebraic(bad),
                    Err(ChessEngineError::InvalidSquare { .. })
                ),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_square_offset_stays_on_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(Square::new(7, 7).offset(1, 1), None);
    }

    #[test]
    fn test_castling_rights_revocation() {
        let mut rights = CastlingRights::ALL;
        rights.revoke_kingside(Color::White);
        assert!(!rights.kingside(Color::White));
        assert!(rights.queenside(Color::White));
        assert!(rights.kingside(Color::Black));

        rights.revoke_all(Color::Black);
        assert!(!rights.kingside(Color::Black));
        assert!(!rights.queenside(Color::Black));
    }

    #[test]
    fn test_piece_symbols() {
        assert_eq!(Piece::new(Color::White, PieceKind::Knight).symbol(), 'N');
        assert_eq!(Piece::new(Color::Black, PieceKind::Queen).symbol(), 'q');
    }
}
