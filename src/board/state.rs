use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

/// Restores the state after `make_move`.
#[derive(Clone, Debug)]
pub struct UnmakeInfo {
    /// The moving piece exactly as it stood on the origin square.
    pub(crate) moved: Piece,
    /// Captured piece, at the square it was taken from.
    pub(crate) captured: Option<Piece>,
    /// Castling rook as it stood before, and the square it was moved to.
    pub(crate) castled_rook: Option<(Piece, Square)>,
}

/// Authoritative game state: board, captures, kings, turn and result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: BTreeMap<Square, Piece>,
    pub(crate) captures: [Vec<Piece>; 2],
    pub(crate) kings: [Square; 2],
    pub(crate) turn: u32,
    pub(crate) done: bool,
    pub(crate) winner: Option<Color>,
}

/// Owned, read-only view of a `GameState` for renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardSnapshot {
    pub pieces: Vec<Piece>,
    pub white_captures: Vec<Piece>,
    pub black_captures: Vec<Piece>,
    pub active_color: Color,
    pub turn: u32,
    pub done: bool,
    pub winner: Option<Color>,
}

impl BoardSnapshot {
    /// The piece on a square, if any.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position == square)
    }

    /// Pieces captured by `color`, in capture order.
    #[must_use]
    pub fn captures(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white_captures,
            Color::Black => &self.black_captures,
        }
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl GameState {
    /// The standard initial position, White to move on turn 1.
    #[must_use]
    pub fn new() -> Self {
        let mut state = GameState::empty();
        for color in Color::BOTH {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                state.put(Piece::new(color, *kind, Square(color.back_rank(), file)));
            }
            for file in 0..8 {
                state.put(Piece::new(
                    color,
                    PieceKind::Pawn,
                    Square(color.pawn_start_rank(), file),
                ));
            }
        }
        state.kings = [Square(0, 4), Square(7, 4)];
        state
    }

    pub(crate) fn empty() -> Self {
        GameState {
            board: BTreeMap::new(),
            captures: [Vec::new(), Vec::new()],
            kings: [Square(0, 4), Square(7, 4)],
            turn: 1,
            done: false,
            winner: None,
        }
    }

    /// Store a piece under its own position.
    pub(crate) fn put(&mut self, piece: Piece) {
        self.board.insert(piece.position, piece);
    }

    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.board.get(&square)
    }

    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        !self.board.contains_key(&square)
    }

    /// Whether `square` holds a piece of `color`.
    #[must_use]
    pub fn is_occupied_by(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|p| p.color == color)
    }

    /// All pieces, ordered a1, b1, ..., h8.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.board.values()
    }

    /// Pieces captured by `color`, in capture order.
    #[must_use]
    pub fn captures(&self, color: Color) -> &[Piece] {
        &self.captures[color.index()]
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// White on odd turns, Black on even ones.
    #[must_use]
    pub fn active_color(&self) -> Color {
        if self.turn % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub(crate) fn finish(&mut self, winner: Color) {
        self.done = true;
        self.winner = Some(winner);
    }

    /// An opponent pawn that may be taken en passant by a pawn of `color`
    /// landing on `target`.
    pub(crate) fn en_passant_victim(&self, color: Color, target: Square) -> Option<&Piece> {
        let behind = target.offset(-color.pawn_direction(), 0)?;
        self.piece_at(behind).filter(|p| {
            p.color != color
                && p.kind == PieceKind::Pawn
                && p.pawn_double_step_turn == Some(self.turn - 1)
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            pieces: self.board.values().copied().collect(),
            white_captures: self.captures(Color::White).to_vec(),
            black_captures: self.captures(Color::Black).to_vec(),
            active_color: self.active_color(),
            turn: self.turn,
            done: self.done,
            winner: self.winner,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
