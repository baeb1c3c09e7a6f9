//! Maps a SAN move to the square it was played from.

use tracing::trace;

use crate::board::Board;
use crate::error::ResolveError;
use crate::geometry::is_valid;
use crate::notation::SanMove;
use crate::types::*;

/// Finds the unique origin square of `mv` for `color` on `board`.
///
/// Candidates are every square holding the moving piece. While more than
/// one remains they are narrowed, in order, by the file hint, the rank hint
/// and finally by [`is_valid`]. Anything other than exactly one survivor is
/// an error; ties are never broken arbitrarily.
pub fn resolve(mv: &SanMove, board: &Board, color: Color) -> Result<Square, ResolveError> {
    let piece = Piece::new(color, mv.kind);
    let mut candidates = board.squares_of(piece);

    if candidates.is_empty() {
        return Err(ResolveError::NoCandidate {
            piece,
            destination: mv.to,
        });
    }

    if candidates.len() > 1 {
        if let Some(file) = mv.from_file {
            candidates.retain(|sq| sq.file == file);
        }
    }
    if candidates.len() > 1 {
        if let Some(rank) = mv.from_rank {
            candidates.retain(|sq| sq.rank == rank);
        }
    }
    if candidates.len() > 1 {
        candidates.retain(|&sq| is_valid(mv.kind, color, sq, mv.to, mv.capture));
    }

    match candidates.as_slice() {
        [origin] => {
            trace!(?piece, from = %origin, to = %mv.to, "resolved origin");
            Ok(*origin)
        }
        [] => Err(ResolveError::NoCandidate {
            piece,
            destination: mv.to,
        }),
        _ => Err(ResolveError::AmbiguousOrigin {
            piece,
            destination: mv.to,
            candidates,
        }),
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
