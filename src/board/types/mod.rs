//! Core chess types.
//!
//! - `Color`, `PieceKind` and `Piece` - sides, kinds and placed pieces
//! - `Square` - (rank, file) board coordinate
//! - `Move` - origin/destination pair with optional promotion

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use square::{file_from_char, file_to_char, rank_from_char, rank_to_char};
