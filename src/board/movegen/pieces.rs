use super::super::catalog::{step_targets, template};
use super::super::{GameState, Move, Piece};

impl GameState {
    /// Moves of a king, queen, rook, bishop or knight from its template.
    pub(crate) fn template_moves(&self, piece: &Piece) -> Vec<Move> {
        let Some(template) = template(piece.kind) else {
            return Vec::new();
        };
        let from = piece.position;

        if !template.extends {
            return step_targets(piece.kind, from)
                .iter()
                .filter(|&&to| !self.is_occupied_by(to, piece.color))
                .map(|&to| Move::new(from, to))
                .collect();
        }

        let mut moves = Vec::new();
        for &(dr, df) in template.deltas {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(blocker) => {
                        if blocker.color != piece.color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
        moves
    }
}
