use super::super::{Color, GameState, Move, Piece, PieceKind, Square};

/// (file offset of the rook from the king, direction the king travels)
const CASTLING_SIDES: [(isize, isize); 2] = [(-4, -1), (3, 1)];

impl GameState {
    /// Castling moves for `color`.
    ///
    /// Requires an unmoved king and rook, empty squares between them, and
    /// that neither the king's square nor the square it crosses is attacked.
    /// The landing square is left to the legality filter.
    pub(crate) fn castling_moves(&mut self, color: Color, origin: Option<Square>) -> Vec<Move> {
        let king_square = self.king_square(color);
        if origin.is_some_and(|o| o != king_square) {
            return Vec::new();
        }
        let Some(king) = self.piece_at(king_square).copied() else {
            return Vec::new();
        };
        if king.kind != PieceKind::King || king.has_moved {
            return Vec::new();
        }

        let mut moves = Vec::new();
        for (rook_offset, step) in CASTLING_SIDES {
            if self.can_castle(&king, rook_offset, step) {
                if let Some(to) = king_square.offset(0, 2 * step) {
                    moves.push(Move::new(king_square, to));
                }
            }
        }
        moves
    }

    fn can_castle(&mut self, king: &Piece, rook_offset: isize, step: isize) -> bool {
        let from = king.position;
        let rook_ready = from
            .offset(0, rook_offset)
            .and_then(|sq| self.piece_at(sq))
            .is_some_and(|rook| {
                rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
            });
        if !rook_ready {
            return false;
        }

        let path_clear = (1..rook_offset.abs())
            .all(|i| from.offset(0, i * step).is_some_and(|sq| self.is_empty(sq)));
        if !path_clear || self.is_check(king.color) {
            return false;
        }

        let Some(crossed) = from.offset(0, step) else {
            return false;
        };
        self.with_move_made(Move::new(from, crossed), |state| !state.is_check(king.color))
            .unwrap_or(false)
    }
}
