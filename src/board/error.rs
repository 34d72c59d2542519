//! Error types for board setup, move application and notation parsing.

use std::fmt;

use super::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positions assembled with `GameBuilder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// No king of this color was placed
    MissingKing { color: Color },
    /// More than one king of this color was placed
    ExtraKing { color: Color, square: Square },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingKing { color } => write!(f, "No {color} king on the board"),
            SetupError::ExtraKing { color, square } => {
                write!(f, "Second {color} king on {square}")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Error type for applying a move to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Nothing stands on the origin square
    EmptyOrigin { square: Square },
    /// The game has already finished
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptyOrigin { square } => write!(f, "No piece on {square}"),
            MoveError::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Broad classes of notation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotationErrorKind {
    /// Structurally unparseable
    Malformed,
    /// Well-formed, but no legal move matches
    Illegal,
    /// Several legal moves match
    Ambiguous,
    /// The move is legal but its capture/check/mate markers are wrong
    AnnotationMismatch,
}

/// Error type for move notation that was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// Input shorter than any valid move
    TooShort { notation: String },
    /// Destination is not a square
    InvalidSquare { notation: String },
    /// Uppercase letter that names no piece
    InvalidPiece { char: char },
    /// `=` followed by something other than Q, B, R or N
    InvalidPromotion { notation: String },
    /// Leftover characters are neither file, rank nor square
    InvalidDisambiguator { notation: String },
    /// Promotion requested for a piece letter
    PromotionOnNonPawn,
    /// Pawn reaches the last rank without `=X`
    PromotionRequired,
    /// `=X` on a pawn move that does not reach the last rank
    PromotionTooEarly,
    /// No legal move of the side to move matches
    NoSuchMove { notation: String },
    /// Castling token with no legal castle on that side
    InvalidCastle { kingside: bool },
    /// More than one legal move matches
    AmbiguousMove { notation: String },
    /// `x` given but nothing is captured
    UnjustifiedCapture { notation: String },
    /// A piece is captured but `x` is missing
    MissingCaptureMarker,
    /// Move mates but lacks `#`
    MissingCheckmateMarker,
    /// Move checks but lacks `+`
    MissingCheckMarker,
    /// `+` given but the move does not check
    NotCheck,
    /// `#` given but the move does not mate
    NotCheckmate,
}

impl NotationError {
    /// Which class of failure this is.
    #[must_use]
    pub const fn kind(&self) -> NotationErrorKind {
        match self {
            NotationError::TooShort { .. }
            | NotationError::InvalidSquare { .. }
            | NotationError::InvalidPiece { .. }
            | NotationError::InvalidPromotion { .. }
            | NotationError::InvalidDisambiguator { .. }
            | NotationError::PromotionOnNonPawn
            | NotationError::PromotionRequired
            | NotationError::PromotionTooEarly => NotationErrorKind::Malformed,
            NotationError::NoSuchMove { .. } | NotationError::InvalidCastle { .. } => {
                NotationErrorKind::Illegal
            }
            NotationError::AmbiguousMove { .. } => NotationErrorKind::Ambiguous,
            NotationError::UnjustifiedCapture { .. }
            | NotationError::MissingCaptureMarker
            | NotationError::MissingCheckmateMarker
            | NotationError::MissingCheckMarker
            | NotationError::NotCheck
            | NotationError::NotCheckmate => NotationErrorKind::AnnotationMismatch,
        }
    }
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::TooShort { notation }
            | NotationError::InvalidDisambiguator { notation }
            | NotationError::NoSuchMove { notation }
            | NotationError::UnjustifiedCapture { notation } => {
                write!(f, "invalid move: {notation}")
            }
            NotationError::InvalidSquare { notation } => {
                write!(f, "invalid destination: {notation}")
            }
            NotationError::InvalidPiece { char } => write!(f, "invalid piece: {char}"),
            NotationError::InvalidPromotion { notation } => {
                write!(f, "invalid promoting piece: {notation}")
            }
            NotationError::PromotionOnNonPawn => {
                write!(f, "only pawns can promote")
            }
            NotationError::PromotionRequired => write!(f, "use pawn promotion notation"),
            NotationError::PromotionTooEarly => {
                write!(f, "pawn must reach other side to promote")
            }
            NotationError::InvalidCastle { kingside: true } => {
                write!(f, "invalid kingside castle")
            }
            NotationError::InvalidCastle { kingside: false } => {
                write!(f, "invalid queenside castle")
            }
            NotationError::AmbiguousMove { notation } => write!(
                f,
                "ambiguous move {notation}, must specify distinguishing rank and/or file"
            ),
            NotationError::MissingCaptureMarker => write!(f, "use capture notation"),
            NotationError::MissingCheckmateMarker => write!(f, "use checkmate notation"),
            NotationError::MissingCheckMarker => write!(f, "use check notation"),
            NotationError::NotCheck => write!(f, "not check"),
            NotationError::NotCheckmate => write!(f, "not checkmate"),
        }
    }
}

impl std::error::Error for NotationError {}
