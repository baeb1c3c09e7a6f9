use replay_core::{Board, Color, Piece, PieceKind, Square};
use thiserror::Error;

/// Channels per square: 6 piece kinds × 2 colors
pub const NUM_CHANNELS: usize = 12;

/// Total number of features: 64 × 12 = 768
pub const NUM_FEATURES: usize = 64 * NUM_CHANNELS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("expected {expected} features, found {found}")]
    Length { expected: usize, found: usize },
    #[error("more than one channel active on {0}")]
    ConflictingChannels(Square),
    #[error("feature index {0} out of range")]
    IndexOutOfRange(u16),
}

/// Channel of a piece within its square's 12 slots.
pub fn channel(piece: Piece) -> usize {
    piece.color.idx() * 6 + piece.kind.idx()
}

fn piece_for_channel(channel: usize) -> Option<Piece> {
    let color = match channel / 6 {
        0 => Color::White,
        1 => Color::Black,
        _ => return None,
    };
    Some(Piece::new(color, PieceKind::ALL[channel % 6]))
}

/// Flat index of a piece standing on a square.
pub fn feature_index(sq: Square, piece: Piece) -> usize {
    sq.index() * NUM_CHANNELS + channel(piece)
}

/// Encodes a board as 768 values, 1.0 where a piece stands, 0.0 elsewhere.
pub fn encode(board: &Board) -> Vec<f32> {
    let mut features = vec![0.0f32; NUM_FEATURES];
    for (sq, piece) in board.occupied() {
        features[feature_index(sq, piece)] = 1.0;
    }
    features
}

/// Inverse of [`encode`]. A square with no channel above 0.5 is empty.
pub fn decode(features: &[f32]) -> Result<Board, DecodeError> {
    if features.len() != NUM_FEATURES {
        return Err(DecodeError::Length {
            expected: NUM_FEATURES,
            found: features.len(),
        });
    }

    let mut board = Board::empty();
    for (idx, slots) in features.chunks_exact(NUM_CHANNELS).enumerate() {
        let mut active = slots.iter().enumerate().filter(|(_, v)| **v > 0.5);
        let Some((ch, _)) = active.next() else {
            continue;
        };
        let sq = Square::from_index(idx).ok_or(DecodeError::IndexOutOfRange(idx as u16))?;
        if active.next().is_some() {
            return Err(DecodeError::ConflictingChannels(sq));
        }
        board.set_piece(sq, piece_for_channel(ch));
    }
    Ok(board)
}

/// Sparse form of [`encode`]: the indices of the active features, ascending.
pub fn active_indices(board: &Board) -> Vec<u16> {
    board
        .occupied()
        .map(|(sq, piece)| feature_index(sq, piece) as u16)
        .collect()
}

/// Inverse of [`active_indices`].
pub fn decode_indices(indices: &[u16]) -> Result<Board, DecodeError> {
    let mut board = Board::empty();
    for &i in indices {
        let idx = i as usize;
        if idx >= NUM_FEATURES {
            return Err(DecodeError::IndexOutOfRange(i));
        }
        let sq = Square::from_index(idx / NUM_CHANNELS).ok_or(DecodeError::IndexOutOfRange(i))?;
        if board.piece_at(sq).is_some() {
            return Err(DecodeError::ConflictingChannels(sq));
        }
        board.set_piece(sq, piece_for_channel(idx % NUM_CHANNELS));
    }
    Ok(board)
}

#[cfg(test)]
#[path = "features_tests.rs"]
mod tests;
