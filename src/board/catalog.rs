//! Movement templates per piece kind.
//!
//! Every kind except the pawn moves by repeating a fixed set of direction
//! deltas. Sliders keep going until blocked; the king and knight take
//! exactly one step. Pawns are generated separately.

use once_cell::sync::Lazy;

use super::{PieceKind, Square};

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
];
const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (-1, -2),
    (1, -2),
    (-1, 2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
];

/// Direction deltas (rank, file) and whether they extend until blocked.
#[derive(Clone, Copy, Debug)]
pub struct MoveTemplate {
    pub deltas: &'static [(isize, isize)],
    pub extends: bool,
}

/// Template for a piece kind; `None` for pawns.
#[must_use]
pub const fn template(kind: PieceKind) -> Option<MoveTemplate> {
    match kind {
        PieceKind::King => Some(MoveTemplate {
            deltas: &ALL_DIRECTIONS,
            extends: false,
        }),
        PieceKind::Queen => Some(MoveTemplate {
            deltas: &ALL_DIRECTIONS,
            extends: true,
        }),
        PieceKind::Rook => Some(MoveTemplate {
            deltas: &ORTHOGONAL,
            extends: true,
        }),
        PieceKind::Bishop => Some(MoveTemplate {
            deltas: &DIAGONAL,
            extends: true,
        }),
        PieceKind::Knight => Some(MoveTemplate {
            deltas: &KNIGHT_JUMPS,
            extends: false,
        }),
        PieceKind::Pawn => None,
    }
}

/// On-board targets of the king (index 0) and knight (index 1) per square.
static STEP_TARGETS: Lazy<[Vec<Vec<Square>>; 2]> = Lazy::new(|| {
    let build = |deltas: &[(isize, isize)]| -> Vec<Vec<Square>> {
        Square::all()
            .map(|from| {
                deltas
                    .iter()
                    .filter_map(|&(dr, df)| from.offset(dr, df))
                    .collect()
            })
            .collect()
    };
    [build(&ALL_DIRECTIONS), build(&KNIGHT_JUMPS)]
});

/// Precomputed single-step targets for fixed-step kinds.
///
/// Returns an empty slice for kinds that are not king or knight.
pub(crate) fn step_targets(kind: PieceKind, from: Square) -> &'static [Square] {
    let table = match kind {
        PieceKind::King => &STEP_TARGETS[0],
        PieceKind::Knight => &STEP_TARGETS[1],
        _ => return &[],
    };
    &table[from.as_index()]
}
