//! Fluent builder for constructing game positions.
//!
//! Allows creating positions piece by piece rather than playing moves from
//! the start.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameBuilder, PieceKind, Square};
//!
//! let state = GameBuilder::new()
//!     .piece(Square(0, 4), Color::White, PieceKind::King)
//!     .piece(Square(7, 4), Color::Black, PieceKind::King)
//!     .piece(Square(1, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(state.pieces().count(), 3);
//! ```

use super::{Color, GameState, Piece, PieceKind, SetupError, Square};

/// A fluent builder for `GameState` positions.
///
/// A piece counts as already moved when it stands away from the square it
/// starts the game on (any rank-2/7 pawn square for pawns), so pawn double
/// steps and castling only become available from home squares unless
/// overridden with `moved`.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    pieces: Vec<Piece>,
    turn: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn starts_on(color: Color, kind: PieceKind, square: Square) -> bool {
    let back = color.back_rank();
    match kind {
        PieceKind::Pawn => square.rank() == color.pawn_start_rank(),
        PieceKind::King => square == Square(back, 4),
        PieceKind::Queen => square == Square(back, 3),
        PieceKind::Rook => square == Square(back, 0) || square == Square(back, 7),
        PieceKind::Bishop => square == Square(back, 2) || square == Square(back, 5),
        PieceKind::Knight => square == Square(back, 1) || square == Square(back, 6),
    }
}

impl GameBuilder {
    /// Create a new empty builder, White to move on turn 1.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            pieces: Vec::new(),
            turn: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameBuilder {
            pieces: GameState::new().pieces().copied().collect(),
            turn: 1,
        }
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|p| p.position != square);
        let mut piece = Piece::new(color, kind, square);
        piece.has_moved = !starts_on(color, kind, square);
        self.pieces.push(piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.position != square);
        self
    }

    /// Override the has-moved flag of the piece on `square`.
    #[must_use]
    pub fn moved(mut self, square: Square, has_moved: bool) -> Self {
        for piece in self.pieces.iter_mut().filter(|p| p.position == square) {
            piece.has_moved = has_moved;
        }
        self
    }

    /// Mark the pawn on `square` as having double-stepped on `turn`.
    #[must_use]
    pub fn double_step(mut self, square: Square, turn: u32) -> Self {
        for piece in self.pieces.iter_mut().filter(|p| p.position == square) {
            piece.pawn_double_step_turn = Some(turn);
            piece.has_moved = true;
        }
        self
    }

    /// Set the side to move, keeping the turn number's magnitude.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        let white_turn = self.turn % 2 == 1;
        if white_turn != (color == Color::White) {
            self.turn += 1;
        }
        self
    }

    /// Set the turn counter; odd turns are White's.
    #[must_use]
    pub const fn turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    /// Build the state, checking there is exactly one king per color.
    pub fn build(self) -> Result<GameState, SetupError> {
        let mut state = GameState::empty();
        let mut kings: [Option<Square>; 2] = [None, None];

        for piece in self.pieces {
            if piece.kind == PieceKind::King {
                let slot = &mut kings[piece.color.index()];
                if slot.is_some() {
                    return Err(SetupError::ExtraKing {
                        color: piece.color,
                        square: piece.position,
                    });
                }
                *slot = Some(piece.position);
            }
            state.put(piece);
        }

        for color in Color::BOTH {
            state.kings[color.index()] =
                kings[color.index()].ok_or(SetupError::MissingKing { color })?;
        }
        state.turn = self.turn.max(1);

        Ok(state)
    }
}
