//! Commands accepted by the interactive `play` loop

use std::str::FromStr;

use chess_engine::{ChessEngineError, Square};

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `e2e4`: both squares at once
    Move(Square, Square),
    /// `e2`: a single click
    Click(Square),
    Undo,
    Reset,
    /// List the legal moves
    Moves,
    /// Redraw the board
    Board,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ChessEngineError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let text = input.trim().to_ascii_lowercase();
        let command = match text.as_str() {
            "undo" | "z" => Command::Undo,
            "reset" | "r" => Command::Reset,
            "moves" | "m" => Command::Moves,
            "board" | "b" => Command::Board,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            square if square.len() == 2 => Command::Click(Square::from_algebraic(square)?),
            pair if pair.len() == 4 && pair.is_ascii() => Command::Move(
                Square::from_algebraic(&pair[..2])?,
                Square::from_algebraic(&pair[2..])?,
            ),
            _ => {
                return Err(ChessEngineError::InvalidNotation {
                    input: input.trim().to_string(),
                })
            }
        };
        Ok(command)
    }
}

/// Shown by `help`
pub const HELP: &str = "\
commands:
  e2e4        play a move
  e2          select a square (two selections make a move)
  undo, z     take back one move
  reset, r    start a new game
  moves, m    list legal moves
  board, b    redraw the board
  quit, q     leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_and_click() {
        assert_eq!(
            "e2e4".parse::<Command>().unwrap(),
            Command::Move(Square::new(6, 4), Square::new(4, 4))
        );
        assert_eq!(" E2 ".parse::<Command>().unwrap(), Command::Click(Square::new(6, 4)));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("z".parse::<Command>().unwrap(), Command::Undo);
        assert_eq!("Reset".parse::<Command>().unwrap(), Command::Reset);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "e9".parse::<Command>(),
            Err(ChessEngineError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "castle".parse::<Command>(),
            Err(ChessEngineError::InvalidNotation { .. })
        ));
    }
}
