//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts of the legal move tree
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Castling, en passant, promotion, check and mate
//! - `proptest.rs` - Property-based tests over random games

mod edge_cases;

use crate::board::{Color, GameBuilder, GameState, PieceKind, Square};

/// Parse a square written in algebraic form, e.g. `"e4"`.
pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Build a position from the piece placement field of a FEN string.
///
/// Only placement and side to move are taken; moved flags are inferred by
/// `GameBuilder` from each piece's square.
pub(super) fn position(placement: &str, side: Color) -> GameState {
    let mut builder = GameBuilder::new();
    for (row, rank_text) in placement.split('/').enumerate() {
        let rank = 7 - row;
        let mut file = 0;
        for c in rank_text.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match c.to_ascii_uppercase() {
                'P' => PieceKind::Pawn,
                other => PieceKind::from_letter(other).unwrap(),
            };
            builder = builder.piece(Square(rank, file), color, kind);
            file += 1;
        }
    }
    builder.side_to_move(side).build().unwrap()
}

/// Parse and make each move in turn, panicking on rejected notation.
pub(super) fn play(state: &mut GameState, moves: &[&str]) {
    for notation in moves {
        let parsed = state
            .parse_notation(notation)
            .unwrap_or_else(|e| panic!("{notation} rejected: {e}"));
        state.make_move(parsed.mv).unwrap();
    }
}
