//! Two-click game session
//!
//! [`GameSession`] is the collaborator side of the engine contract: it turns
//! square selections into candidate moves, matches them against the cached
//! legal set by equality and applies only the generator's copy.
//!
//! # Selection Flow
//!
//! ```text
//! click(a)        -> Selected(a)            selection = [a]
//! click(a) again  -> Deselected             selection = []
//! click(b)        -> Moved(mv)              selection = []     (a->b legal)
//!                 -> Rejected { a, b }      selection = [b]    (a->b illegal)
//! ```
//!
//! A rejected pair keeps the second square selected, so clicking another of
//! your own pieces after an illegal target simply starts a new selection.

use chess_engine::api::{find_legal_move, reset_game, undo_move};
use chess_engine::{GameState, Move, Position, Square};
use tracing::{debug, info};

/// Result of feeding one square to [`GameSession::click`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First square of a pair recorded
    Selected(Square),
    /// The selected square was clicked again
    Deselected,
    /// The pair formed a legal move, which has been applied
    Moved(Move),
    /// The pair is not a legal move; `to` is now the sole selection
    Rejected { from: Square, to: Square },
}

/// One game in progress plus the pending square selection
#[derive(Debug, Clone)]
pub struct GameSession {
    position: Position,
    legal: Vec<Move>,
    selection: Vec<Square>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    /// Start a session from an arbitrary position (fixtures, puzzles)
    pub fn from_position(position: Position) -> Self {
        let mut session = GameSession {
            position,
            legal: Vec::new(),
            selection: Vec::with_capacity(2),
        };
        session.refresh_legal_moves();
        session
    }

    /// Feed one clicked square
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if self.selection.last() == Some(&square) {
            self.selection.clear();
            debug!("[SESSION] Selection cleared");
            return ClickOutcome::Deselected;
        }

        self.selection.push(square);
        let &[from, to] = self.selection.as_slice() else {
            return ClickOutcome::Selected(square);
        };

        let candidate = Move::new(from, to, self.position.board());
        match find_legal_move(&self.legal, &candidate) {
            Some(mv) => {
                self.position.apply(mv);
                self.selection.clear();
                info!("[SESSION] {} played {}", self.position.turn().opponent(), mv);
                self.refresh_legal_moves();
                ClickOutcome::Moved(mv)
            }
            None => {
                self.selection.clear();
                self.selection.push(to);
                debug!("[SESSION] {} is not legal", candidate);
                ClickOutcome::Rejected { from, to }
            }
        }
    }

    /// Both clicks of a move in one call, discarding any pending selection
    pub fn submit(&mut self, from: Square, to: Square) -> ClickOutcome {
        self.selection.clear();
        self.click(from);
        self.click(to)
    }

    /// Take back one ply
    ///
    /// Clears the terminal flags and the selection. Returns the undone move,
    /// or `None` at the start of the game.
    pub fn undo(&mut self) -> Option<Move> {
        let undone = undo_move(&mut self.position);
        self.selection.clear();
        if let Some(mv) = undone {
            info!("[SESSION] Undid {}", mv);
            self.refresh_legal_moves();
        }
        undone
    }

    /// Discard the game and start over from the initial position
    pub fn reset(&mut self) {
        reset_game(&mut self.position);
        self.selection.clear();
        self.refresh_legal_moves();
        info!("[SESSION] New game");
    }

    /// Status of the side to move, from the cached legal set
    pub fn status(&self) -> GameState {
        match (self.legal.is_empty(), self.position.in_check()) {
            (false, false) => GameState::Playing,
            (false, true) => GameState::Check,
            (true, true) => GameState::Checkmate,
            (true, false) => GameState::Stalemate,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal
    }

    /// Destinations of the legal moves starting on `from`, for highlighting
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        self.legal
            .iter()
            .filter(|mv| mv.from() == from)
            .map(Move::to)
            .collect()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn selection(&self) -> &[Square] {
        &self.selection
    }

    /// Square awaiting a destination, if any
    pub fn selected(&self) -> Option<Square> {
        self.selection.first().copied()
    }

    fn refresh_legal_moves(&mut self) {
        self.legal = self.position.legal_moves();
        debug!(
            ply = self.position.ply(),
            count = self.legal.len(),
            "[SESSION] {} to move",
            self.position.turn()
        );

        if self.position.is_checkmate() {
            info!("[SESSION] Checkmate, {} wins", self.position.turn().opponent());
        } else if self.position.is_stalemate() {
            info!("[SESSION] Stalemate");
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
