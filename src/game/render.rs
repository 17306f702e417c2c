//! Text rendering of a session's board
//!
//! Rank 8 is printed first. Each square takes two columns: the piece glyph
//! (`.` when empty) and a marker.
//!
//! | Marker | Meaning |
//! |---|---|
//! | `<` | selected square |
//! | `*` | legal destination of the selected piece |
//!
//! ```text
//! 8 r n b q k b n r
//! 7 p p p p p p p p
//! 6 . . . . . . . .
//! 5 . . . . . . . .
//! 4 . . . . .*. . .
//! 3 . . . . .*. . .
//! 2 P P P P P<P P P
//! 1 R N B Q K B N R
//!   a b c d e f g h
//! ```

use chess_engine::{Color, Piece, PieceKind, Position, Square};

use crate::game::session::GameSession;

/// What to draw besides the pieces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Chess glyphs instead of letters
    pub unicode: bool,
    pub selected: Option<Square>,
    pub targets: Vec<Square>,
}

impl RenderOptions {
    /// Options reflecting the session's current selection
    pub fn for_session(session: &GameSession, unicode: bool, show_legal_moves: bool) -> Self {
        let selected = session.selected();
        let targets = match selected {
            Some(square) if show_legal_moves => session.legal_targets(square),
            _ => Vec::new(),
        };
        RenderOptions {
            unicode,
            selected,
            targets,
        }
    }
}

/// Draw `position` with rank and file labels
pub fn render_position(position: &Position, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(9 * 20);

    for row in 0..8u8 {
        let rank = Square::new(row, 0).rank_char();
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let square = Square::new(row, col);
            out.push(glyph(position.piece_at(square), options.unicode));
            out.push(if options.selected == Some(square) {
                '<'
            } else if options.targets.contains(&square) {
                '*'
            } else {
                ' '
            });
        }

        let trimmed_len = out.trim_end_matches(' ').len();
        out.truncate(trimmed_len);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h\n");
    out
}

/// Draw the session's board with its selection markers
pub fn render_session(session: &GameSession, unicode: bool, show_legal_moves: bool) -> String {
    let options = RenderOptions::for_session(session, unicode, show_legal_moves);
    render_position(session.position(), &options)
}

fn glyph(piece: Option<Piece>, unicode: bool) -> char {
    let Some(piece) = piece else {
        return '.';
    };
    if !unicode {
        return piece.symbol();
    }

    match (piece.color, piece.kind) {
        (Color::White, PieceKind::King) => '\u{2654}',
        (Color::White, PieceKind::Queen) => '\u{2655}',
        (Color::White, PieceKind::Rook) => '\u{2656}',
        (Color::White, PieceKind::Bishop) => '\u{2657}',
        (Color::White, PieceKind::Knight) => '\u{2658}',
        (Color::White, PieceKind::Pawn) => '\u{2659}',
        (Color::Black, PieceKind::King) => '\u{265A}',
        (Color::Black, PieceKind::Queen) => '\u{265B}',
        (Color::Black, PieceKind::Rook) => '\u{265C}',
        (Color::Black, PieceKind::Bishop) => '\u{265D}',
        (Color::Black, PieceKind::Knight) => '\u{265E}',
        (Color::Black, PieceKind::Pawn) => '\u{265F}',
    }
}
