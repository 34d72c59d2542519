//! Piece, piece kind and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Pawn => 5,
        }
    }

    /// Parse a moving-piece letter (`K`, `Q`, `B`, `R`, `N`).
    ///
    /// Pawns have no letter in notation, so `P` is rejected.
    #[must_use]
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c {
            'K' => Some(PieceKind::King),
            'Q' => Some(PieceKind::Queen),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            _ => None,
        }
    }

    /// Parse a promotion letter (`Q`, `B`, `R`, `N`).
    #[must_use]
    pub fn from_promotion_letter(c: char) -> Option<PieceKind> {
        match PieceKind::from_letter(c) {
            Some(PieceKind::King) | None => None,
            kind => kind,
        }
    }

    /// Notation letter; `None` for pawns.
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            PieceKind::King => Some('K'),
            PieceKind::Queen => Some('Q'),
            PieceKind::Rook => Some('R'),
            PieceKind::Bishop => Some('B'),
            PieceKind::Knight => Some('N'),
            PieceKind::Pawn => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> usize {
        self.opponent().back_rank()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    /// Always equal to the board key the piece is stored under.
    pub position: Square,
    pub has_moved: bool,
    /// Turn on which this pawn advanced two squares.
    pub pawn_double_step_turn: Option<u32>,
}

impl Piece {
    /// A fresh, unmoved piece.
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind, position: Square) -> Self {
        Piece {
            color,
            kind,
            position,
            has_moved: false,
            pawn_double_step_turn: None,
        }
    }

    /// Human-readable description, e.g. `white pawn e2`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} {} {}", self.color.name(), self.kind.name(), self.position)
    }

    /// Single-character symbol: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn symbol(&self) -> char {
        let c = self.kind.letter().unwrap_or('P');
        if self.color == Color::White {
            c
        } else {
            c.to_ascii_lowercase()
        }
    }
}
