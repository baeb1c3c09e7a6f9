//! Parallel replay and encoding of many games

use board_features::{active_indices, decode_indices, DecodeError};
use rayon::prelude::*;
use replay_core::{find_result, replay, Board, BoardError, Outcome, RawGame, ReplayError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{BoardFormat, DatasetConfig, ErrorPolicy};

/// One successfully replayed game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedGame {
    /// Position of the game in the input
    pub index: usize,
    /// Line number of the move list
    pub line: usize,
    pub outcome: Option<Outcome>,
    pub plies: usize,
    /// Active feature indices of each post-move snapshot
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boards: Vec<Vec<u16>>,
    /// Signed 8x8 grid of each post-move snapshot
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub codes: Vec<[[i8; 8]; 8]>,
}

/// A stored snapshot that no longer describes a board
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Features(#[from] DecodeError),
    #[error(transparent)]
    Codes(#[from] BoardError),
}

impl EncodedGame {
    /// Rebuilds the post-move boards from whichever form was written.
    pub fn snapshots(&self) -> Result<Vec<Board>, SnapshotError> {
        if !self.codes.is_empty() {
            return self
                .codes
                .iter()
                .map(|rows| Board::from_codes(rows).map_err(SnapshotError::from))
                .collect();
        }
        self.boards
            .iter()
            .map(|indices| decode_indices(indices).map_err(SnapshotError::from))
            .collect()
    }
}

/// A game that could not be replayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFailure {
    pub index: usize,
    pub line: usize,
    pub error: String,
}

/// Everything a build produced, in input order
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    pub games: Vec<EncodedGame>,
    pub failures: Vec<GameFailure>,
}

impl BatchOutput {
    pub fn total_plies(&self) -> usize {
        self.games.iter().map(|g| g.plies).sum()
    }
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("game {index} (line {line}): {source}")]
    Game {
        index: usize,
        line: usize,
        #[source]
        source: ReplayError,
    },
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Replays and encodes a single game.
///
/// The outcome line wins over a result token found in the move text.
pub fn encode_game(
    index: usize,
    raw: &RawGame,
    config: &DatasetConfig,
) -> Result<EncodedGame, ReplayError> {
    let game = replay(&raw.moves)?;
    let outcome = raw.outcome.as_deref().and_then(find_result).or(game.result);

    let mut boards = Vec::new();
    let mut codes = Vec::new();
    if config.include_boards {
        match config.board_format {
            BoardFormat::Indices => {
                boards = game.snapshots.iter().map(active_indices).collect();
            }
            BoardFormat::Codes => {
                codes = game.snapshots.iter().map(Board::to_codes).collect();
            }
        }
    }

    debug!(index, line = raw.line, plies = game.snapshots.len(), "encoded game");
    Ok(EncodedGame {
        index,
        line: raw.line,
        outcome,
        plies: game.snapshots.len(),
        boards,
        codes,
    })
}

/// Replays every game on the rayon pool and collects the results in order.
///
/// Games are independent, so a failing game never affects the others;
/// `config.on_error` decides whether it is skipped or ends the build.
pub fn build_dataset(games: &[RawGame], config: &DatasetConfig) -> Result<BatchOutput, BuildError> {
    let games = match config.max_games {
        Some(n) => &games[..n.min(games.len())],
        None => games,
    };

    let run = || {
        games
            .par_iter()
            .enumerate()
            .map(|(index, raw)| (index, raw.line, encode_game(index, raw, config)))
            .collect::<Vec<_>>()
    };
    let results = match config.threads {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()?
            .install(run),
        None => run(),
    };

    let mut output = BatchOutput::default();
    for (index, line, result) in results {
        match result {
            Ok(game) => output.games.push(game),
            Err(source) => match config.on_error {
                ErrorPolicy::Abort => return Err(BuildError::Game { index, line, source }),
                ErrorPolicy::Skip => {
                    warn!(index, line, error = %source, "skipping game");
                    output.failures.push(GameFailure {
                        index,
                        line,
                        error: source.to_string(),
                    });
                }
            },
        }
    }

    info!(
        replayed = output.games.len(),
        failed = output.failures.len(),
        plies = output.total_plies(),
        "dataset built"
    );
    Ok(output)
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
