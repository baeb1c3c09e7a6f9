//! Error types for move-text replay.
//!
//! Every variant aborts the game being replayed and nothing else; whether a
//! batch skips the game or stops is the caller's decision.

use thiserror::Error;

use crate::types::{Piece, Square};

/// The move text could not be split into move tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// A word does not match the move grammar.
    ///
    /// `position` is the 0-based index of the word among the move words
    /// (move numbers, comments and annotations excluded).
    #[error("malformed move text {word:?} at move word {position}")]
    MalformedMoveText { word: String, position: usize },

    /// A word opens with an uppercase letter that names no piece.
    #[error("unknown piece letter '{letter}' in {word:?}")]
    UnknownPieceLetter { letter: char, word: String },
}

/// A move token could not be mapped to a single origin square.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Filtering left more than one piece that could have made the move.
    #[error("ambiguous origin for {piece:?} to {destination}: {candidates:?}")]
    AmbiguousOrigin {
        piece: Piece,
        destination: Square,
        candidates: Vec<Square>,
    },

    /// No piece of the required kind and color could have made the move.
    #[error("no {piece:?} can reach {destination}")]
    NoCandidate { piece: Piece, destination: Square },
}

/// Failure replaying one game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    /// `ply` is 1-based.
    #[error("ply {ply} ({san}): {source}")]
    Resolve {
        ply: usize,
        san: String,
        #[source]
        source: ResolveError,
    },
}

/// A board could not be built from its textual or signed form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank row {0} does not describe exactly 8 files")]
    RankWidth(usize),
    #[error("invalid piece character '{0}'")]
    InvalidPieceChar(char),
    #[error("invalid signed piece code {0}")]
    InvalidCode(i8),
}
