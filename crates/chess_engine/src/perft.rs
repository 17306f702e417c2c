//! Perft: counting legal move paths
//!
//! `perft(position, depth)` is the number of leaf nodes in the legal-move tree
//! of the given depth. Published counts exist for many positions, which makes
//! perft the standard end-to-end check of a move generator: any missing or
//! extra move, at any ply, changes the total.
//!
//! | Position | Depth 1 | Depth 2 | Depth 3 |
//! |---|---|---|---|
//! | Start | 20 | 400 | 8902 |
//!
//! The walk applies and undoes moves on the caller's position, which is left
//! exactly as it was, terminal flags included.

use crate::chess_move::Move;
use crate::position::Position;

/// Count leaf nodes of the legal-move tree
///
/// `perft(pos, 0) == 1`; for `d > 0`, the sum of `perft(child, d - 1)` over all
/// legal moves.
pub fn perft(position: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.generate_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in moves {
        position.apply(mv);
        nodes += perft(position, depth - 1);
        position.undo();
    }
    nodes
}

/// Leaf count below each root move, in generation order
pub fn divide(position: &mut Position, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let moves = position.generate_legal_moves();
    let mut counts = Vec::with_capacity(moves.len());
    for mv in moves {
        position.apply(mv);
        counts.push((mv, perft(position, depth - 1)));
        position.undo();
    }
    counts
}

/// Aggregate counters for perft diagnostics
///
/// Events are counted on the last ply only, matching the usual published
/// tables.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftStats {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftStats {
    fn add(&mut self, other: PerftStats) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.en_passant += other.en_passant;
        self.castles += other.castles;
        self.promotions += other.promotions;
        self.checks += other.checks;
        self.checkmates += other.checkmates;
    }
}

/// Perft with a breakdown of the final ply
pub fn perft_stats(position: &mut Position, depth: u32) -> PerftStats {
    if depth == 0 {
        return PerftStats {
            nodes: 1,
            ..Default::default()
        };
    }

    let moves = position.generate_legal_moves();
    let mut stats = PerftStats::default();

    for mv in moves {
        position.apply(mv);
        if depth == 1 {
            stats.nodes += 1;
            if mv.piece_captured().is_some() {
                stats.captures += 1;
            }
            if mv.is_en_passant() {
                stats.en_passant += 1;
            }
            if mv.is_castle() {
                stats.castles += 1;
            }
            if mv.is_promotion() {
                stats.promotions += 1;
            }
            // turn has flipped: in_check asks about the side that was hit
            if position.in_check() {
                stats.checks += 1;
                if position.generate_legal_moves().is_empty() {
                    stats.checkmates += 1;
                }
            }
        } else {
            stats.add(perft_stats(position, depth - 1));
        }
        position.undo();
    }

    stats
}
