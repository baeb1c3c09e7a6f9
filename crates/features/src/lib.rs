//! Board Feature Encoding
//!
//! Turns replayed board snapshots into flat one-hot vectors for neural
//! network training, and back.
//!
//! # Layout
//!
//! Square-major: 64 squares in board order (a8 first, h1 last), each with
//! 12 channels:
//! ```text
//! 0..6   white pawn, bishop, knight, rook, queen, king
//! 6..12  black pawn, bishop, knight, rook, queen, king
//! ```
//! An empty square has no active channel.

mod features;

pub use features::*;
