mod kings;
mod pawns;
mod pieces;

use super::{Color, GameState, Move, PieceKind, Square};

impl GameState {
    /// Moves that obey piece movement shapes, castling excluded.
    ///
    /// Castling never captures, so this is exactly the set of moves that can
    /// land on an enemy king.
    pub(crate) fn attack_moves(
        &self,
        color: Color,
        origin: Option<Square>,
    ) -> impl Iterator<Item = Move> + '_ {
        self.board
            .values()
            .filter(move |p| p.color == color && origin.map_or(true, |o| o == p.position))
            .flat_map(move |p| match p.kind {
                PieceKind::Pawn => self.pawn_moves(p),
                _ => self.template_moves(p),
            })
    }

    /// Pseudo-legal moves for `color`, optionally restricted to one origin.
    ///
    /// These may leave the mover's own king in check.
    pub fn pseudo_moves(
        &mut self,
        color: Color,
        origin: Option<Square>,
    ) -> impl Iterator<Item = Move> + '_ {
        let castles = self.castling_moves(color, origin);
        let state: &GameState = self;
        state.attack_moves(color, origin).chain(castles)
    }

    /// Legal moves for `color`: pseudo-legal moves that do not leave its king
    /// attacked. Each candidate is tried with make/unmake as it is pulled.
    pub fn legal_moves(
        &mut self,
        color: Color,
        origin: Option<Square>,
    ) -> impl Iterator<Item = Move> + '_ {
        let candidates: Vec<Move> = self.pseudo_moves(color, origin).collect();
        candidates
            .into_iter()
            .filter(move |&mv| self.is_legal_for(color, mv))
    }

    #[must_use]
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        self.legal_moves(color, None).next().is_some()
    }

    fn is_legal_for(&mut self, color: Color, mv: Move) -> bool {
        self.with_move_made(mv, |state| !state.is_check(color))
            .unwrap_or(false)
    }

    /// Whether any opponent move reaches `color`'s king.
    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        let king = self.king_square(color);
        self.attack_moves(color.opponent(), None)
            .any(|mv| mv.to() == king)
    }

    /// In check with no legal move to get out of it.
    #[must_use]
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        self.is_check(color) && !self.has_legal_move(color)
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// Promotions count once per destination; the promotion kind is chosen
    /// in notation, not by the generator.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let color = self.active_color();
        let moves: Vec<Move> = self.legal_moves(color, None).collect();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            if let Ok(info) = self.make_move(mv) {
                nodes += self.perft(depth - 1);
                self.unmake_move(mv, info);
            }
        }

        nodes
    }
}
