//! Chess board representation and rules.
//!
//! The board is a sparse map from square to piece. Move generation is
//! lazy and legality is checked by making and unmaking candidate moves.
//! Castling, en passant and promotion are supported.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameState};
//!
//! let mut state = GameState::new();
//! let moves: Vec<_> = state.legal_moves(Color::White, None).collect();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod catalog;
mod error;
mod make_unmake;
mod movegen;
mod notation;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::GameBuilder;
pub use catalog::{template, MoveTemplate};
pub use error::{MoveError, NotationError, NotationErrorKind, SetupError, SquareError};
pub use notation::ParsedMove;
pub use state::{BoardSnapshot, GameState, UnmakeInfo};
pub use types::{Color, Move, Piece, PieceKind, Square};
