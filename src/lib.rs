//! Two-player chess rules: game state, legal move generation and strict
//! move notation parsing, plus a turn-by-turn game controller.

pub mod board;
pub mod game;

pub use board::{Color, GameState, Move, Piece, PieceKind, Square};
pub use game::{GameConfig, GameController, MoveOutcome};
