//! Displacement rules per piece kind.
//!
//! Purely geometric: intervening squares, the color of a captured piece and
//! king safety are not looked at.

use crate::types::*;

/// Whether `kind` of `color` may move from `from` to `to` by displacement alone.
pub fn is_valid(kind: PieceKind, color: Color, from: Square, to: Square, capture: bool) -> bool {
    let d_rank = to.rank as i8 - from.rank as i8;
    let d_file = to.file as i8 - from.file as i8;
    if d_rank == 0 && d_file == 0 {
        return false;
    }

    let forward = -color.sign();
    match kind {
        PieceKind::Pawn => {
            if capture {
                d_file.abs() == 1 && d_rank == forward
            } else if d_file != 0 {
                false
            } else if from.rank == color.pawn_rank() && d_rank == 2 * forward {
                true
            } else {
                d_rank == forward
            }
        }
        PieceKind::Bishop => diagonal(d_rank, d_file),
        PieceKind::Rook => straight(d_rank, d_file),
        PieceKind::Queen => straight(d_rank, d_file) || diagonal(d_rank, d_file),
        PieceKind::King => d_rank.abs() <= 1 && d_file.abs() <= 1,
        PieceKind::Knight => {
            matches!((d_rank.abs(), d_file.abs()), (1, 2) | (2, 1))
        }
    }
}

#[inline]
fn straight(d_rank: i8, d_file: i8) -> bool {
    d_rank == 0 || d_file == 0
}

#[inline]
fn diagonal(d_rank: i8, d_file: i8) -> bool {
    d_rank.abs() == d_file.abs()
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
