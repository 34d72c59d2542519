//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::square::Square;

/// An (origin, destination) pair, with the promotion kind when a pawn
/// reaches the last rank.
///
/// The generator never fills in `promotion`; the notation parser does.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(self, promotion: Option<PieceKind>) -> Self {
        Move {
            from: self.from,
            to: self.to,
            promotion,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Get the promotion kind, if any
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Signed file distance travelled (positive towards the h file).
    #[inline]
    #[must_use]
    pub const fn file_delta(self) -> isize {
        self.to.1 as isize - self.from.1 as isize
    }

    /// Signed rank distance travelled (positive towards rank 8).
    #[inline]
    #[must_use]
    pub const fn rank_delta(self) -> isize {
        self.to.0 as isize - self.from.0 as isize
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(letter) = self.promotion.and_then(PieceKind::letter) {
            write!(f, "={letter}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(letter) = self.promotion.and_then(PieceKind::letter) {
            write!(f, "{}", letter.to_ascii_lowercase())?;
        }
        Ok(())
    }
}
