#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{BoardSnapshot, Color, Move, PieceKind, Square};

/// Result of processing one notation string.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveOutcome {
    pub accepted: bool,
    /// What happened, or why the input was rejected.
    pub message: String,
    pub origin: Option<Square>,
    pub destination: Option<Square>,
    pub promotion: Option<PieceKind>,
    pub is_check: bool,
    pub is_checkmate: bool,
}

impl MoveOutcome {
    pub(crate) fn accepted(message: &str, mv: Move, is_check: bool, is_checkmate: bool) -> Self {
        let message = if is_checkmate {
            format!("(checkmate) {message}")
        } else if is_check {
            format!("(check) {message}")
        } else {
            message.to_string()
        };

        MoveOutcome {
            accepted: true,
            message,
            origin: Some(mv.from()),
            destination: Some(mv.to()),
            promotion: mv.promotion(),
            is_check,
            is_checkmate,
        }
    }

    pub(crate) fn rejected(reason: impl ToString) -> Self {
        MoveOutcome {
            accepted: false,
            message: reason.to_string(),
            origin: None,
            destination: None,
            promotion: None,
            is_check: false,
            is_checkmate: false,
        }
    }

    /// The applied move, for accepted outcomes.
    #[must_use]
    pub fn mv(&self) -> Option<Move> {
        Some(Move::new(self.origin?, self.destination?).with_promotion(self.promotion))
    }
}

/// Receives game progress from `GameController::run`.
pub trait GameObserver {
    /// Called after every processed input, accepted or not.
    fn on_turn(&mut self, _snapshot: &BoardSnapshot, _outcome: &MoveOutcome) {}

    fn on_game_over(&mut self, _snapshot: &BoardSnapshot, _winner: Color) {}
}

impl GameObserver for () {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_prefixes() {
        let mv = Move::new(Square(0, 3), Square(4, 7));
        assert_eq!(MoveOutcome::accepted("x", mv, false, false).message, "x");
        assert_eq!(MoveOutcome::accepted("x", mv, true, false).message, "(check) x");
        assert_eq!(
            MoveOutcome::accepted("x", mv, true, true).message,
            "(checkmate) x"
        );
    }

    #[test]
    fn test_rejected_has_no_move() {
        let outcome = MoveOutcome::rejected("invalid move: Ke2");
        assert!(!outcome.accepted);
        assert_eq!(outcome.mv(), None);
        assert_eq!(outcome.message, "invalid move: Ke2");
    }
}
