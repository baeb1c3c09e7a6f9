//! Replays algebraic chess move text into board snapshots.
//!
//! The pipeline per game is: [`tokenize`] the move text, [`resolve`] each
//! move's origin square against the live board, apply it, and keep a copy
//! of the board after every ply. Legality is inferred from piece geometry
//! only; check, pins, en passant and promotion are not modeled.

pub mod board;
pub mod error;
pub mod game;
pub mod geometry;
pub mod notation;
pub mod reader;
pub mod resolve;
pub mod types;

pub use board::*;
pub use error::*;
pub use game::*;
pub use geometry::is_valid;
pub use notation::*;
pub use reader::*;
pub use resolve::resolve;
pub use types::*;
