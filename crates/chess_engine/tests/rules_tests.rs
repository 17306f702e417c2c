//! Rules Integration Tests
//!
//! End-to-end behaviour through the public API:
//! - Initial move set
//! - Apply/undo round trips
//! - Pins and king safety
//! - Checkmate and stalemate
//! - Castling rights history
//! - En passant

use chess_engine::api::{get_game_state, new_game, play_move, play_notation, reset_game, undo_move};
use chess_engine::move_gen::is_square_attacked;
use chess_engine::{
    ChessEngineError, Color, GameState, Move, Piece, PieceKind, Position, PositionBuilder, Square,
};

fn sq(text: &str) -> Square {
    Square::from_algebraic(text).unwrap()
}

fn play_all(position: &mut Position, moves: &[&str]) {
    for notation in moves {
        play_notation(position, notation)
            .unwrap_or_else(|e| panic!("{notation} should be legal: {e}"));
    }
}

fn notations(moves: &[Move]) -> Vec<String> {
    moves.iter().map(Move::notation).collect()
}

// ============================================================================
// Initial Position Tests
// ============================================================================

#[test]
fn test_initial_position_has_twenty_legal_moves() {
    //! 16 pawn pushes and double pushes plus 4 knight moves
    let mut position = new_game();
    let legal = position.legal_moves();

    assert_eq!(legal.len(), 20);
    let pawn_moves = legal
        .iter()
        .filter(|m| m.piece_moved().map(|p| p.kind) == Some(PieceKind::Pawn))
        .count();
    assert_eq!(pawn_moves, 16);
    assert!(legal.iter().all(|m| !m.is_castle() && !m.is_en_passant()));
}

#[test]
fn test_initial_legal_moves_follow_board_order() {
    //! Pieces are visited a8 to h1, so White's a-pawn comes first and the
    //! g1 knight last.
    let mut position = new_game();
    let legal = notations(&position.legal_moves());

    assert_eq!(legal.first().map(String::as_str), Some("a2a3"));
    assert_eq!(legal.last().map(String::as_str), Some("g1h3"));
}

// ============================================================================
// Round Trip Tests
// ============================================================================

#[test]
fn test_round_trip_at_every_ply() {
    //! Plays a deterministic game, remembering every intermediate position,
    //! then unwinds it and compares each one on the way back.
    let mut position = new_game();
    let mut history = vec![position.clone()];

    for ply in 0..60 {
        let legal = position.legal_moves();
        if legal.is_empty() {
            break;
        }
        let mv = legal[(ply * 7 + 3) % legal.len()];
        position.apply(mv);
        history.push(position.clone());
    }

    history.pop();
    while let Some(expected) = history.pop() {
        position.undo();
        position.clear_terminal_flags();
        assert_eq!(position.board(), expected.board());
        assert_eq!(position.turn(), expected.turn());
        assert_eq!(position.king_square(Color::White), expected.king_square(Color::White));
        assert_eq!(position.king_square(Color::Black), expected.king_square(Color::Black));
        assert_eq!(position.castling_rights(), expected.castling_rights());
        assert_eq!(position.en_passant(), expected.en_passant());
    }

    assert_eq!(position, Position::new());
}

#[test]
fn test_undo_move_clears_terminal_flags() {
    let mut position = new_game();
    play_all(&mut position, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(get_game_state(&mut position), GameState::Checkmate);
    assert!(position.is_checkmate());

    let undone = undo_move(&mut position).expect("one move to undo");

    assert_eq!(undone.notation(), "d8h4");
    assert!(!position.is_checkmate());
    assert_eq!(get_game_state(&mut position), GameState::Playing);
}

#[test]
fn test_undo_move_on_new_game_is_noop() {
    let mut position = new_game();
    assert!(undo_move(&mut position).is_none());
    assert_eq!(position, Position::new());
}

#[test]
fn test_reset_game_discards_history() {
    let mut position = new_game();
    play_all(&mut position, &["e2e4", "e7e5"]);

    reset_game(&mut position);

    assert_eq!(position, Position::new());
}

// ============================================================================
// King Safety Tests
// ============================================================================

#[test]
fn test_queen_h5_excludes_self_check() {
    //! After 1.e4 e5 2.Qh5 every black reply must leave e8 safe
    let mut position = new_game();
    play_all(&mut position, &["e2e4", "e7e5", "d1h5"]);

    let legal = position.legal_moves();
    assert!(!legal.is_empty());

    for mv in legal {
        position.apply(mv);
        let king = position.king_square(Color::Black);
        assert!(
            !is_square_attacked(position.board(), king, Color::White),
            "{mv} leaves the black king attacked"
        );
        position.undo();
    }
}

#[test]
fn test_reverse_fools_mate() {
    let mut position = new_game();
    play_all(&mut position, &["e2e4", "f7f6", "d2d4", "g7g5", "d1h5"]);

    assert!(position.in_check());
    assert_eq!(get_game_state(&mut position), GameState::Checkmate);
}

#[test]
fn test_get_game_state_reports_check() {
    let mut position = new_game();
    play_all(&mut position, &["e2e4", "d7d6", "f1b5"]);

    assert_eq!(get_game_state(&mut position), GameState::Check);
    let legal = notations(&position.legal_moves());
    assert!(legal.contains(&"c7c6".to_string()));
    assert!(!legal.contains(&"a7a6".to_string()));
}

// ============================================================================
// Terminal State Tests
// ============================================================================

#[test]
fn test_scholars_mate() {
    //! 1.e4 e5 2.Bc4 Nc6 3.Qh5 Nf6?? 4.Qxf7#
    let mut position = new_game();
    play_all(
        &mut position,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );

    assert!(position.legal_moves().is_empty());
    assert!(position.is_checkmate());
    assert!(!position.is_stalemate());
    assert_eq!(position.turn(), Color::Black);
}

#[test]
fn test_stalemate_fixture() {
    //! Black king h8, White king f7, White queen g6: no check, no moves
    let mut position = PositionBuilder::new()
        .piece("h8", Piece::new(Color::Black, PieceKind::King))
        .unwrap()
        .piece("f7", Piece::new(Color::White, PieceKind::King))
        .unwrap()
        .piece("g6", Piece::new(Color::White, PieceKind::Queen))
        .unwrap()
        .side_to_move(Color::Black)
        .build()
        .unwrap();

    assert!(position.legal_moves().is_empty());
    assert!(position.is_stalemate());
    assert!(!position.is_checkmate());
    assert_eq!(get_game_state(&mut position), GameState::Stalemate);
}

// ============================================================================
// Castling Rights Tests
// ============================================================================

#[test]
fn test_unmoved_king_and_rooks_keep_rights() {
    let mut position = new_game();
    play_all(&mut position, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);

    let rights = position.castling_rights();
    assert!(rights.white_kingside && rights.white_queenside);
    assert!(rights.black_kingside && rights.black_queenside);
    assert!(notations(&position.legal_moves()).contains(&"e1g1".to_string()));
}

#[test]
fn test_rook_move_revokes_kingside_through_unrelated_undo() {
    let mut position = new_game();
    play_all(&mut position, &["h2h4", "b8c6", "h1h2", "c6b8"]);
    assert!(!position.castling_rights().white_kingside);
    assert!(position.castling_rights().white_queenside);

    undo_move(&mut position);

    assert!(!position.castling_rights().white_kingside);
    assert!(position.castling_rights().white_queenside);
}

#[test]
fn test_castling_through_play_move() {
    //! The front end only supplies two squares; the rook still follows
    let mut position = new_game();
    play_all(&mut position, &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"]);

    let mv = play_move(&mut position, sq("e1"), sq("g1")).unwrap();

    assert!(mv.is_castle());
    assert_eq!(
        position.piece_at(sq("f1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert!(position.is_empty(sq("h1")));
}

// ============================================================================
// En Passant Tests
// ============================================================================

#[test]
fn test_en_passant_removes_passed_pawn() {
    //! Black's d-pawn sits on d4; White's c2-c4 passes it
    let mut position = new_game();
    play_all(&mut position, &["e2e4", "d7d5", "e4e5", "d5d4", "c2c4"]);

    let legal = position.legal_moves();
    let capture = legal
        .iter()
        .find(|m| m.notation() == "d4c3")
        .copied()
        .expect("en passant must be offered");
    assert!(capture.is_en_passant());

    position.apply(capture);

    assert!(position.is_empty(sq("c4")), "passed pawn removed from its square");
    assert!(position.is_empty(sq("d4")));
    assert_eq!(
        position.piece_at(sq("c3")),
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
}

#[test]
fn test_en_passant_only_immediately() {
    let mut position = new_game();
    play_all(&mut position, &["e2e4", "d7d5", "e4e5", "f7f5"]);
    assert!(notations(&position.legal_moves()).contains(&"e5f6".to_string()));

    play_all(&mut position, &["g1f3", "a7a6"]);
    assert!(!notations(&position.legal_moves()).contains(&"e5f6".to_string()));
}

// ============================================================================
// Facade Error Tests
// ============================================================================

#[test]
fn test_play_move_diagnostics() {
    let mut position = new_game();

    assert!(matches!(
        play_move(&mut position, sq("e4"), sq("e5")),
        Err(ChessEngineError::NoPieceAtSquare { .. })
    ));
    assert!(matches!(
        play_move(&mut position, sq("e7"), sq("e5")),
        Err(ChessEngineError::WrongPieceColor { .. })
    ));
    assert!(matches!(
        play_move(&mut position, sq("e2"), sq("e5")),
        Err(ChessEngineError::IllegalMove { .. })
    ));
    assert!(matches!(
        play_notation(&mut position, "e2"),
        Err(ChessEngineError::InvalidNotation { .. })
    ));
    assert_eq!(position, Position::new(), "failed moves change nothing");
}
