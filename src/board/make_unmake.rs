use super::{Color, GameState, Move, MoveError, Piece, PieceKind, Square, UnmakeInfo};

/// Rook origin and destination for a king that castles onto `king_to`.
fn castling_rook_squares(king_to: Square, file_delta: isize) -> Option<(Square, Square)> {
    if file_delta < 0 {
        Some((king_to.offset(0, -2)?, king_to.offset(0, 1)?))
    } else {
        Some((king_to.offset(0, 1)?, king_to.offset(0, -1)?))
    }
}

impl GameState {
    /// Apply a move without any legality checking.
    ///
    /// Handles captures (including en passant), promotion, the double-step
    /// marker and the castling rook, then advances the turn. The returned
    /// `UnmakeInfo` undoes all of it via `unmake_move`.
    pub fn make_move(&mut self, mv: Move) -> Result<UnmakeInfo, MoveError> {
        let moved = self
            .board
            .remove(&mv.from())
            .ok_or(MoveError::EmptyOrigin { square: mv.from() })?;
        let color = moved.color;

        let captured = match self.board.remove(&mv.to()) {
            Some(victim) => Some(victim),
            None if moved.kind == PieceKind::Pawn && mv.file_delta() != 0 => {
                self.take_en_passant_victim(color, mv.to())
            }
            None => None,
        };
        if let Some(victim) = captured {
            self.captures[color.index()].push(victim);
        }

        let mut placed = match mv.promotion() {
            Some(kind) => Piece::new(color, kind, mv.to()),
            None => Piece {
                position: mv.to(),
                has_moved: true,
                ..moved
            },
        };
        if placed.kind == PieceKind::Pawn && mv.rank_delta().abs() == 2 {
            placed.pawn_double_step_turn = Some(self.turn);
        }
        self.put(placed);

        let mut castled_rook = None;
        if moved.kind == PieceKind::King {
            self.kings[color.index()] = mv.to();
            if mv.file_delta().abs() == 2 {
                castled_rook = self.shift_castling_rook(mv);
            }
        }

        self.turn += 1;

        Ok(UnmakeInfo {
            moved,
            captured,
            castled_rook,
        })
    }

    /// Undo a move made with `make_move`.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        self.turn -= 1;

        if let Some((rook, rook_to)) = info.castled_rook {
            self.board.remove(&rook_to);
            self.put(rook);
        }

        self.board.remove(&mv.to());
        self.put(info.moved);
        if info.moved.kind == PieceKind::King {
            self.kings[info.moved.color.index()] = mv.from();
        }

        if let Some(victim) = info.captured {
            self.captures[info.moved.color.index()].pop();
            self.put(victim);
        }
    }

    /// Run `probe` with `mv` made, then restore the state.
    pub(crate) fn with_move_made<T>(
        &mut self,
        mv: Move,
        probe: impl FnOnce(&mut GameState) -> T,
    ) -> Result<T, MoveError> {
        let info = self.make_move(mv)?;
        let result = probe(self);
        self.unmake_move(mv, info);
        Ok(result)
    }

    fn take_en_passant_victim(&mut self, color: Color, target: Square) -> Option<Piece> {
        let behind = target.offset(-color.pawn_direction(), 0)?;
        if self.is_occupied_by(behind, color.opponent()) {
            self.board.remove(&behind)
        } else {
            None
        }
    }

    fn shift_castling_rook(&mut self, mv: Move) -> Option<(Piece, Square)> {
        let (rook_from, rook_to) = castling_rook_squares(mv.to(), mv.file_delta())?;
        let rook = self.board.remove(&rook_from)?;
        self.put(Piece {
            position: rook_to,
            has_moved: true,
            ..rook
        });
        Some((rook, rook_to))
    }
}
