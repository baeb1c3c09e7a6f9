//! Line-oriented game-record reader.
//!
//! A line starting with `1.` is a game's move list. The line a fixed
//! number of lines below it carries that game's outcome text.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default distance from a move-list line to its outcome line.
pub const DEFAULT_OUTCOME_OFFSET: usize = 2;

/// Raw text of one game as found in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGame {
    /// 1-based line number of the move list.
    pub line: usize,
    pub moves: String,
    /// Missing when the input ends before the outcome line.
    pub outcome: Option<String>,
}

/// Collects move lists and their outcome lines.
///
/// A new move list seen before the previous game's outcome line replaces
/// the pending outcome position, so that game keeps `outcome: None`.
pub fn read_games<R: BufRead>(reader: R, outcome_offset: usize) -> io::Result<Vec<RawGame>> {
    let mut games: Vec<RawGame> = Vec::new();
    let mut pending: Option<(usize, usize)> = None; // (game index, outcome line index)

    for (i, line) in reader.lines().enumerate() {
        let line = line?;

        if line.starts_with("1.") {
            games.push(RawGame {
                line: i + 1,
                moves: line.trim_end().to_owned(),
                outcome: None,
            });
            pending = Some((games.len() - 1, i + outcome_offset));
        }

        if let Some((game, at)) = pending {
            if at == i {
                games[game].outcome = Some(line.trim_end().to_owned());
                pending = None;
            }
        }
    }

    Ok(games)
}

pub fn read_games_from_path(path: &Path, outcome_offset: usize) -> io::Result<Vec<RawGame>> {
    let file = File::open(path)?;
    read_games(BufReader::new(file), outcome_offset)
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
