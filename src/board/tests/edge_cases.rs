//! Special positions and edge cases.

use super::{play, position, sq};
use crate::board::{Color, GameBuilder, GameState, Move, NotationError, PieceKind};

fn castling_position() -> GameBuilder {
    GameBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .piece(sq("e8"), Color::Black, PieceKind::King)
}

fn has_move(state: &mut GameState, from: &str, to: &str) -> bool {
    let color = state.active_color();
    state
        .legal_moves(color, None)
        .any(|mv| mv.from() == sq(from) && mv.to() == sq(to))
}

#[test]
fn test_castling_available() {
    let mut state = castling_position().build().unwrap();
    assert!(has_move(&mut state, "e1", "g1"));
    assert!(has_move(&mut state, "e1", "c1"));
}

#[test]
fn test_castling_after_king_moved() {
    let mut state = castling_position()
        .moved(sq("e1"), true)
        .build()
        .unwrap();
    assert!(!has_move(&mut state, "e1", "g1"));
    assert!(!has_move(&mut state, "e1", "c1"));
}

#[test]
fn test_castling_after_king_returns_home() {
    let mut state = castling_position().build().unwrap();
    play(&mut state, &["Ke2", "Kd8", "Ke1", "Ke8"]);
    assert_eq!(
        state.parse_notation("O-O").unwrap_err(),
        NotationError::InvalidCastle { kingside: true }
    );
}

#[test]
fn test_castling_after_rook_moved() {
    let mut state = castling_position()
        .moved(sq("h1"), true)
        .build()
        .unwrap();
    assert!(!has_move(&mut state, "e1", "g1"));
    assert!(has_move(&mut state, "e1", "c1"));
}

#[test]
fn test_castling_blocked() {
    let mut state = castling_position()
        .piece(sq("b1"), Color::White, PieceKind::Knight)
        .piece(sq("g1"), Color::White, PieceKind::Knight)
        .build()
        .unwrap();
    assert!(!has_move(&mut state, "e1", "g1"));
    assert!(!has_move(&mut state, "e1", "c1"));
    assert!(!has_move(&mut GameState::new(), "e1", "g1"));
}

#[test]
fn test_castling_out_of_check() {
    let mut state = castling_position()
        .piece(sq("e5"), Color::Black, PieceKind::Rook)
        .build()
        .unwrap();
    assert!(state.is_check(Color::White));
    assert!(!has_move(&mut state, "e1", "g1"));
    assert!(!has_move(&mut state, "e1", "c1"));
}

#[test]
fn test_castling_through_attacked_square() {
    let mut state = castling_position()
        .piece(sq("f5"), Color::Black, PieceKind::Rook)
        .build()
        .unwrap();
    assert!(!has_move(&mut state, "e1", "g1"));
    assert!(has_move(&mut state, "e1", "c1"));
}

#[test]
fn test_castling_into_check() {
    let mut state = castling_position()
        .piece(sq("g5"), Color::Black, PieceKind::Rook)
        .build()
        .unwrap();
    assert!(!has_move(&mut state, "e1", "g1"));
    assert!(state
        .pseudo_moves(Color::White, Some(sq("e1")))
        .any(|mv| mv.to() == sq("g1")));
}

#[test]
fn test_queenside_castling_with_b_file_attacked() {
    let mut state = castling_position()
        .piece(sq("b5"), Color::Black, PieceKind::Rook)
        .build()
        .unwrap();
    assert!(has_move(&mut state, "e1", "c1"));
}

#[test]
fn test_castling_moves_rook() {
    let mut state = castling_position().build().unwrap();
    play(&mut state, &["O-O"]);
    let rook = state.piece_at(sq("f1")).unwrap();
    assert_eq!(rook.kind, PieceKind::Rook);
    assert!(rook.has_moved);
    assert!(state.piece_at(sq("h1")).is_none());
    assert_eq!(state.king_square(Color::White), sq("g1"));

    let mut state = castling_position().side_to_move(Color::Black).build().unwrap();
    play(&mut state, &["Kf7", "O-O-O"]);
    assert_eq!(state.piece_at(sq("d1")).map(|p| p.kind), Some(PieceKind::Rook));
    assert_eq!(state.king_square(Color::White), sq("c1"));
}

#[test]
fn test_en_passant_expires() {
    let mut state = GameState::new();
    play(&mut state, &["e4", "a6", "e5", "d5", "h3", "a5"]);
    assert!(!has_move(&mut state, "e5", "d6"));
    assert!(matches!(
        state.parse_notation("exd6"),
        Err(NotationError::UnjustifiedCapture { .. })
    ));
}

#[test]
fn test_en_passant_removes_victim() {
    let mut state = GameState::new();
    play(&mut state, &["e4", "a6", "e5", "d5", "exd6"]);
    assert!(state.piece_at(sq("d5")).is_none());
    assert_eq!(state.captures(Color::White).len(), 1);
    assert_eq!(state.captures(Color::White)[0].kind, PieceKind::Pawn);
}

#[test]
fn test_en_passant_single_step_is_not_capturable() {
    let mut state = GameState::new();
    play(&mut state, &["e4", "d6", "e5", "d5"]);
    assert!(!has_move(&mut state, "e5", "d6"));
}

#[test]
fn test_en_passant_for_black() {
    let mut state = GameState::new();
    play(&mut state, &["a3", "d5", "a4", "d4", "e4"]);
    let parsed = state.parse_notation("dxe3").unwrap();
    assert_eq!(parsed.message, "black pawn d4 captures white pawn e4 en passant");
}

#[test]
fn test_black_promotion() {
    let mut state = GameBuilder::new()
        .piece(sq("h8"), Color::White, PieceKind::King)
        .piece(sq("a8"), Color::Black, PieceKind::King)
        .piece(sq("b2"), Color::Black, PieceKind::Pawn)
        .side_to_move(Color::Black)
        .build()
        .unwrap();
    assert_eq!(
        state.parse_notation("b1").unwrap_err(),
        NotationError::PromotionRequired
    );
    play(&mut state, &["b1=R"]);
    let rook = state.piece_at(sq("b1")).unwrap();
    assert_eq!((rook.kind, rook.color), (PieceKind::Rook, Color::Black));
}

#[test]
fn test_pinned_piece_cannot_move() {
    let mut state = GameBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e2"), Color::White, PieceKind::Knight)
        .piece(sq("e8"), Color::Black, PieceKind::Rook)
        .piece(sq("a8"), Color::Black, PieceKind::King)
        .build()
        .unwrap();
    assert_eq!(state.legal_moves(Color::White, Some(sq("e2"))).count(), 0);
    assert!(state.pseudo_moves(Color::White, Some(sq("e2"))).count() > 0);
}

#[test]
fn test_stalemate_is_not_checkmate() {
    let mut state = GameBuilder::new()
        .piece(sq("a8"), Color::Black, PieceKind::King)
        .piece(sq("b6"), Color::White, PieceKind::Queen)
        .piece(sq("c1"), Color::White, PieceKind::King)
        .side_to_move(Color::Black)
        .build()
        .unwrap();
    assert!(!state.is_check(Color::Black));
    assert!(!state.has_legal_move(Color::Black));
    assert!(!state.is_checkmate(Color::Black));
}

#[test]
fn test_back_rank_mate() {
    let mut state = position("6k1/5ppp/8/8/8/8/8/R5K1", Color::White);
    let parsed = state.parse_notation("Ra8#").unwrap();
    assert!(parsed.is_checkmate);
    state.make_move(parsed.mv).unwrap();
    assert!(state.is_checkmate(Color::Black));
}

#[test]
fn test_check_queries_are_idempotent() {
    let mut state = GameState::new();
    play(&mut state, &["f3", "e5", "g4", "Qh4#"]);
    let before = state.clone();
    for _ in 0..3 {
        assert!(state.is_check(Color::White));
        assert!(state.is_checkmate(Color::White));
        assert!(!state.is_checkmate(Color::Black));
    }
    assert_eq!(state, before);
}

#[test]
fn test_restricted_origin() {
    let mut state = GameState::new();
    let knight: Vec<Move> = state.legal_moves(Color::White, Some(sq("g1"))).collect();
    assert_eq!(knight.len(), 2);
    assert_eq!(state.legal_moves(Color::White, Some(sq("e4"))).count(), 0);
    assert_eq!(state.legal_moves(Color::Black, Some(sq("g1"))).count(), 0);
}
