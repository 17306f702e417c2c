//! Perft Integration Tests
//!
//! Leaf counts against published reference tables. A single missing or extra
//! move anywhere in the tree changes these numbers, so they cover castling,
//! en passant, pins and discovered checks together.
//!
//! Promotion is always to a queen, so only positions without promotions in
//! the tested depth range are used.

use chess_engine::perft::{divide, perft, perft_stats, PerftStats};
use chess_engine::{CastlingRights, Color, Piece, PieceKind, Position, PositionBuilder, Square};

/// Build a position from eight rows of piece letters, rank 8 first
///
/// `.` is an empty square; letters follow the usual uppercase-white convention.
fn position_from_rows(rows: [&str; 8], turn: Color, rights: CastlingRights) -> Position {
    let mut builder = PositionBuilder::new()
        .side_to_move(turn)
        .castling_rights(rights);

    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "row {row} must have eight squares");
        for (col, symbol) in line.chars().enumerate() {
            if symbol == '.' {
                continue;
            }
            let color = if symbol.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match symbol.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                other => panic!("unknown piece symbol {other}"),
            };
            builder = builder.place(Square::new(row as u8, col as u8), Piece::new(color, kind));
        }
    }

    builder.build().unwrap()
}

/// "Kiwipete": castling on both wings, pins, and an en-passant reply at depth 2
fn kiwipete() -> Position {
    position_from_rows(
        [
            "r...k..r", //
            "p.ppqpb.", //
            "bn..pnp.", //
            "...PN...", //
            ".p..P...", //
            "..N..Q.p", //
            "PPPBBPPP", //
            "R...K..R", //
        ],
        Color::White,
        CastlingRights::ALL,
    )
}

/// Rook-and-pawn endgame rich in en passant and horizontal pins
fn rook_pawn_endgame() -> Position {
    position_from_rows(
        [
            "........", //
            "..p.....", //
            "...p....", //
            "KP.....r", //
            ".R...p.k", //
            "........", //
            "....P.P.", //
            "........", //
        ],
        Color::White,
        CastlingRights::NONE,
    )
}

// ============================================================================
// Starting Position
// ============================================================================

#[test]
fn test_perft_start_depth_0_to_3() {
    let mut position = Position::new();

    assert_eq!(perft(&mut position, 0), 1);
    assert_eq!(perft(&mut position, 1), 20);
    assert_eq!(perft(&mut position, 2), 400);
    assert_eq!(perft(&mut position, 3), 8902);
}

#[test]
fn test_perft_start_stats_depth_3() {
    let mut position = Position::new();

    let stats = perft_stats(&mut position, 3);

    assert_eq!(
        stats,
        PerftStats {
            nodes: 8902,
            captures: 34,
            en_passant: 0,
            castles: 0,
            promotions: 0,
            checks: 12,
            checkmates: 0,
        }
    );
}

#[test]
fn test_perft_leaves_position_untouched() {
    let mut position = Position::new();
    let before = position.clone();

    perft(&mut position, 3);
    divide(&mut position, 2);
    perft_stats(&mut position, 2);

    assert_eq!(position, before);
}

#[test]
fn test_divide_sums_to_perft() {
    let mut position = Position::new();

    let counts = divide(&mut position, 3);
    assert_eq!(counts.len(), 20);

    let total: u64 = counts.iter().map(|(_, n)| n).sum();
    assert_eq!(total, 8902);

    let e4 = counts
        .iter()
        .find(|(mv, _)| mv.notation() == "e2e4")
        .map(|(_, n)| *n);
    assert_eq!(e4, Some(600));
}

// ============================================================================
// Kiwipete
// ============================================================================

#[test]
fn test_perft_kiwipete_depth_1() {
    let mut position = kiwipete();

    let stats = perft_stats(&mut position, 1);

    assert_eq!(stats.nodes, 48);
    assert_eq!(stats.captures, 8);
    assert_eq!(stats.castles, 2);
    assert_eq!(stats.en_passant, 0);
    assert_eq!(stats.checks, 0);
}

#[test]
fn test_perft_kiwipete_depth_2() {
    let mut position = kiwipete();

    let stats = perft_stats(&mut position, 2);

    assert_eq!(stats.nodes, 2039);
    assert_eq!(stats.captures, 351);
    assert_eq!(stats.en_passant, 1);
    assert_eq!(stats.castles, 91);
    assert_eq!(stats.promotions, 0);
    assert_eq!(stats.checks, 3);
}

// ============================================================================
// Rook and Pawn Endgame
// ============================================================================

#[test]
fn test_perft_rook_pawn_endgame() {
    let mut position = rook_pawn_endgame();

    assert_eq!(perft(&mut position, 1), 14);
    assert_eq!(perft(&mut position, 2), 191);
    assert_eq!(perft(&mut position, 3), 2812);
}

#[test]
fn test_perft_rook_pawn_endgame_stats_depth_3() {
    let mut position = rook_pawn_endgame();

    let stats = perft_stats(&mut position, 3);

    assert_eq!(stats.nodes, 2812);
    assert_eq!(stats.captures, 209);
    assert_eq!(stats.en_passant, 2);
    assert_eq!(stats.checks, 267);
}
