//! Dataset builder for ML-chess
//!
//! This crate provides infrastructure for:
//! - Reading game records and replaying their move text in parallel
//! - Encoding every board snapshot as one-hot features
//! - Writing the encoded games as JSON lines with their outcomes
//! - Reporting which games could not be replayed
//!
//! # Usage
//!
//! ```bash
//! # Build a dataset from a PGN export
//! cargo run -p dataset -- build games.pgn --output boards.jsonl --report report.json
//!
//! # Print every snapshot of a single game
//! cargo run -p dataset -- replay "1.e4 e5 2.Nf3 Nc6"
//! ```

mod config;
mod output;
mod report;
mod runner;

pub use config::*;
pub use output::*;
pub use report::*;
pub use runner::*;
