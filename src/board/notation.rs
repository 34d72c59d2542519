//! Move notation support.
//!
//! Accepted forms are `O-O`, `O-O-O` and
//! `[Piece][file|rank|square][x]<square>[=Promotion][+|#]`, e.g. `e4`,
//! `Nf3`, `exd5`, `R1d2`, `Qh4#`, `e8=Q+`.
//!
//! Parsing is strict: capture, check and mate markers must match what the
//! move actually does, and promotion must be spelled out.
//!
//! # Examples
//! ```
//! use chess_rules::board::GameState;
//!
//! let mut state = GameState::new();
//! let parsed = state.parse_notation("e4").unwrap();
//! assert_eq!(parsed.message, "white pawn e2 moves to e4");
//! assert_eq!(state.move_to_notation(parsed.mv), "e4");
//! ```

use super::error::NotationError;
use super::types::{file_from_char, file_to_char, rank_from_char, rank_to_char};
use super::{Color, GameState, Move, Piece, PieceKind, Square};

/// A move that passed every notation check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedMove {
    /// Human-readable description of what the move does.
    pub message: String,
    pub mv: Move,
    /// The move checks the opponent (also true for mate).
    pub is_check: bool,
    pub is_checkmate: bool,
}

impl ParsedMove {
    #[must_use]
    pub fn origin(&self) -> Square {
        self.mv.from()
    }

    #[must_use]
    pub fn destination(&self) -> Square {
        self.mv.to()
    }

    #[must_use]
    pub fn promotion(&self) -> Option<PieceKind> {
        self.mv.promotion()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Annotation {
    Plain,
    Check,
    Checkmate,
}

fn success_message(mover: &Piece, dest: Square, victim: Option<&Piece>) -> String {
    match victim {
        Some(victim) if victim.position != dest => format!(
            "{} captures {} en passant",
            mover.describe(),
            victim.describe()
        ),
        Some(victim) => format!("{} captures {}", mover.describe(), victim.describe()),
        None => format!("{} moves to {}", mover.describe(), dest),
    }
}

fn parse_square(chars: &[char]) -> Option<Square> {
    match chars {
        [file, rank] => Some(Square(rank_from_char(*rank)?, file_from_char(*file)?)),
        _ => None,
    }
}

/// File and rank constraints from the characters before the destination.
fn parse_disambiguator(chars: &[char]) -> Option<(Option<usize>, Option<usize>)> {
    match chars {
        [] => Some((None, None)),
        [c] => match (file_from_char(*c), rank_from_char(*c)) {
            (Some(file), _) => Some((Some(file), None)),
            (None, Some(rank)) => Some((None, Some(rank))),
            (None, None) => None,
        },
        _ => parse_square(chars).map(|sq| (Some(sq.file()), Some(sq.rank()))),
    }
}

impl GameState {
    /// Parse and fully validate notation for the side to move.
    ///
    /// The state is only probed (make/unmake), never left modified.
    pub fn parse_notation(&mut self, notation: &str) -> Result<ParsedMove, NotationError> {
        let text = notation.trim();
        if notation.chars().count() < 2 {
            return Err(NotationError::TooShort {
                notation: notation.to_string(),
            });
        }

        let color = self.active_color();
        match text {
            "O-O-O" => return self.parse_castle(color, false),
            "O-O" => return self.parse_castle(color, true),
            _ => {}
        }

        let all: Vec<char> = text.chars().collect();
        let mut chars: &[char] = &all;

        let annotation = match chars.split_last() {
            Some(('+', head)) => {
                chars = head;
                Annotation::Check
            }
            Some(('#', head)) => {
                chars = head;
                Annotation::Checkmate
            }
            _ => Annotation::Plain,
        };

        let mut promotion = None;
        if let [head @ .., '=', letter] = chars {
            let kind = PieceKind::from_promotion_letter(*letter).ok_or_else(|| {
                NotationError::InvalidPromotion {
                    notation: letter.to_string(),
                }
            })?;
            promotion = Some(kind);
            chars = head;
        }

        let split = chars.len().saturating_sub(2);
        let (mut head, dest_chars) = chars.split_at(split);
        let dest = parse_square(dest_chars).ok_or_else(|| NotationError::InvalidSquare {
            notation: dest_chars.iter().collect(),
        })?;

        let mut kind = PieceKind::Pawn;
        if let Some((&first, rest)) = head.split_first() {
            if first.is_ascii_uppercase() {
                kind = PieceKind::from_letter(first)
                    .ok_or(NotationError::InvalidPiece { char: first })?;
                head = rest;
            }
        }

        if kind != PieceKind::Pawn && promotion.is_some() {
            return Err(NotationError::PromotionOnNonPawn);
        }
        if kind == PieceKind::Pawn {
            let reaches_last_rank = dest.rank() == color.pawn_promotion_rank();
            match (promotion.is_some(), reaches_last_rank) {
                (false, true) => return Err(NotationError::PromotionRequired),
                (true, false) => return Err(NotationError::PromotionTooEarly),
                _ => {}
            }
        }

        let victim = match self.piece_at(dest) {
            Some(piece) if piece.color != color => Some(*piece),
            None if kind == PieceKind::Pawn => self.en_passant_victim(color, dest).copied(),
            _ => None,
        };
        if let Some((&'x', rest)) = head.split_last() {
            head = rest;
            if victim.is_none() {
                return Err(NotationError::UnjustifiedCapture {
                    notation: text.to_string(),
                });
            }
        } else if victim.is_some() {
            return Err(NotationError::MissingCaptureMarker);
        }

        let (file, rank) = parse_disambiguator(head).ok_or_else(|| {
            NotationError::InvalidDisambiguator {
                notation: text.to_string(),
            }
        })?;

        let mv = self
            .find_unique_move(color, kind, dest, file, rank, text)?
            .with_promotion(promotion);
        let mover = *self
            .piece_at(mv.from())
            .ok_or_else(|| NotationError::NoSuchMove {
                notation: text.to_string(),
            })?;
        let (is_check, is_checkmate) = self.check_status_after(color, mv, text)?;

        if is_checkmate && annotation != Annotation::Checkmate {
            return Err(NotationError::MissingCheckmateMarker);
        }
        if is_check && !is_checkmate && annotation != Annotation::Check {
            return Err(NotationError::MissingCheckMarker);
        }
        if annotation == Annotation::Check && !is_check {
            return Err(NotationError::NotCheck);
        }
        if annotation == Annotation::Checkmate && !is_checkmate {
            return Err(NotationError::NotCheckmate);
        }

        Ok(ParsedMove {
            message: success_message(&mover, dest, victim.as_ref()),
            mv,
            is_check,
            is_checkmate,
        })
    }

    fn parse_castle(&mut self, color: Color, kingside: bool) -> Result<ParsedMove, NotationError> {
        let king = self.king_square(color);
        let wanted = if kingside { 2 } else { -2 };
        let castles: Vec<Move> = self
            .legal_moves(color, Some(king))
            .filter(|mv| mv.rank_delta() == 0 && mv.file_delta() == wanted)
            .collect();
        let [mv] = castles.as_slice() else {
            return Err(NotationError::InvalidCastle { kingside });
        };

        let notation = if kingside { "O-O" } else { "O-O-O" };
        let (is_check, is_checkmate) = self.check_status_after(color, *mv, notation)?;
        let side = if kingside { "kingside" } else { "queenside" };
        Ok(ParsedMove {
            message: format!("{side} castle"),
            mv: *mv,
            is_check,
            is_checkmate,
        })
    }

    fn find_unique_move(
        &mut self,
        color: Color,
        kind: PieceKind,
        dest: Square,
        file: Option<usize>,
        rank: Option<usize>,
        notation: &str,
    ) -> Result<Move, NotationError> {
        let origins: Vec<Square> = self
            .pieces()
            .filter(|p| p.color == color && p.kind == kind)
            .map(|p| p.position)
            .filter(|sq| file.map_or(true, |f| sq.file() == f))
            .filter(|sq| rank.map_or(true, |r| sq.rank() == r))
            .collect();

        let mut matching = Vec::new();
        for origin in origins {
            matching.extend(
                self.legal_moves(color, Some(origin))
                    .filter(|mv| mv.to() == dest),
            );
        }

        match matching.as_slice() {
            [] => Err(NotationError::NoSuchMove {
                notation: notation.to_string(),
            }),
            [mv] => Ok(*mv),
            _ => Err(NotationError::AmbiguousMove {
                notation: notation.to_string(),
            }),
        }
    }

    /// (check, checkmate) for the opponent once `mv` is played.
    fn check_status_after(
        &mut self,
        color: Color,
        mv: Move,
        notation: &str,
    ) -> Result<(bool, bool), NotationError> {
        let opponent = color.opponent();
        self.with_move_made(mv, |state| {
            let is_checkmate = state.is_checkmate(opponent);
            (state.is_check(opponent), is_checkmate)
        })
        .map_err(|_| NotationError::NoSuchMove {
            notation: notation.to_string(),
        })
    }

    /// Format a legal move so that `parse_notation` accepts it.
    ///
    /// Uses the shortest disambiguator that singles out the origin, adds
    /// the capture, promotion and check/mate markers, and writes castling
    /// as `O-O` / `O-O-O`. A pawn reaching the last rank without a chosen
    /// promotion is written as promoting to a queen.
    pub fn move_to_notation(&mut self, mv: Move) -> String {
        let Some(piece) = self.piece_at(mv.from()).copied() else {
            return mv.to_string();
        };

        if piece.kind == PieceKind::King && mv.file_delta().abs() == 2 {
            let token = if mv.file_delta() > 0 { "O-O" } else { "O-O-O" };
            return token.to_string();
        }

        let mv = if piece.kind == PieceKind::Pawn
            && mv.to().rank() == piece.color.pawn_promotion_rank()
            && mv.promotion().is_none()
        {
            mv.with_promotion(Some(PieceKind::Queen))
        } else {
            mv
        };

        let is_capture = match self.piece_at(mv.to()) {
            Some(target) => target.color != piece.color,
            None => {
                piece.kind == PieceKind::Pawn
                    && self.en_passant_victim(piece.color, mv.to()).is_some()
            }
        };

        let mut text = String::new();
        match piece.kind.letter() {
            None => {
                if is_capture {
                    text.push(file_to_char(mv.from().file()));
                }
            }
            Some(letter) => {
                text.push(letter);
                let (needs_file, needs_rank) = self.needs_disambiguation(&piece, mv.to());
                if needs_file {
                    text.push(file_to_char(mv.from().file()));
                }
                if needs_rank {
                    text.push(rank_to_char(mv.from().rank()));
                }
            }
        }

        if is_capture {
            text.push('x');
        }
        text.push_str(&mv.to().to_string());

        if let Some(letter) = mv.promotion().and_then(PieceKind::letter) {
            text.push('=');
            text.push(letter);
        }

        let opponent = piece.color.opponent();
        let status = self.with_move_made(mv, |state| {
            (state.is_check(opponent), state.is_checkmate(opponent))
        });
        match status {
            Ok((_, true)) => text.push('#'),
            Ok((true, false)) => text.push('+'),
            _ => {}
        }

        text
    }

    /// Returns (`needs_file`, `needs_rank`) for a piece moving to `dest`.
    fn needs_disambiguation(&mut self, piece: &Piece, dest: Square) -> (bool, bool) {
        let rivals: Vec<Square> = self
            .pieces()
            .filter(|p| p.color == piece.color && p.kind == piece.kind)
            .map(|p| p.position)
            .filter(|&sq| sq != piece.position)
            .collect();
        let rivals: Vec<Square> = rivals
            .into_iter()
            .filter(|&sq| self.legal_moves(piece.color, Some(sq)).any(|mv| mv.to() == dest))
            .collect();

        if rivals.is_empty() {
            return (false, false);
        }

        let same_file = rivals.iter().any(|sq| sq.file() == piece.position.file());
        let same_rank = rivals.iter().any(|sq| sq.rank() == piece.position.rank());

        match (same_file, same_rank) {
            (false, _) => (true, false),
            (true, false) => (false, true),
            (true, true) => (true, true),
        }
    }
}
