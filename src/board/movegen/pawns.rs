use super::super::{GameState, Move, Piece};

impl GameState {
    pub(crate) fn pawn_moves(&self, pawn: &Piece) -> Vec<Move> {
        let mut moves = Vec::new();
        let from = pawn.position;
        let dir = pawn.color.pawn_direction();

        if let Some(one) = from.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
            moves.push(Move::new(from, one));
            if !pawn.has_moved {
                if let Some(two) = one.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
                    moves.push(Move::new(from, two));
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            let capturable = match self.piece_at(target) {
                Some(other) => other.color != pawn.color,
                None => self.en_passant_victim(pawn.color, target).is_some(),
            };
            if capturable {
                moves.push(Move::new(from, target));
            }
        }

        moves
    }
}
