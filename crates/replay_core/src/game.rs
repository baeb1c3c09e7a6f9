//! Game reconstruction: drives tokens through the resolver and the board.

use tracing::{debug, trace};

use crate::board::Board;
use crate::error::ReplayError;
use crate::notation::{find_result, tokenize, MoveToken, Outcome};
use crate::resolve::resolve;
use crate::types::*;

/// Replay state for one game: the live board and the side to move.
#[derive(Clone, Debug)]
pub struct GameReplay {
    board: Board,
    side_to_move: Color,
    plies: usize,
}

impl Default for GameReplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameReplay {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_position(Board::startpos(), Color::White)
    }

    pub fn from_position(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            plies: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Plies played so far.
    pub fn plies(&self) -> usize {
        self.plies
    }

    /// Plays one token for the side to move and returns the resulting snapshot.
    pub fn play(&mut self, token: &MoveToken) -> Result<Board, ReplayError> {
        let color = self.side_to_move;
        match token {
            MoveToken::Castle(side) => self.board.apply_castle(color, *side),
            MoveToken::Normal(mv) => {
                let from = resolve(mv, &self.board, color).map_err(|source| {
                    ReplayError::Resolve {
                        ply: self.plies + 1,
                        san: token.to_string(),
                        source,
                    }
                })?;
                self.board.apply_move(from, mv.to, Piece::new(color, mv.kind));
            }
        }

        self.plies += 1;
        self.side_to_move = color.other();
        trace!(ply = self.plies, ?color, san = %token, "played");
        Ok(self.board.clone())
    }

    /// Plays every token in order, collecting one snapshot per ply.
    pub fn play_all(&mut self, tokens: &[MoveToken]) -> Result<Vec<Board>, ReplayError> {
        let mut snapshots = Vec::with_capacity(tokens.len());
        for token in tokens {
            snapshots.push(self.play(token)?);
        }
        Ok(snapshots)
    }
}

/// A fully replayed game.
#[derive(Clone, Debug)]
pub struct ReplayedGame {
    pub tokens: Vec<MoveToken>,
    /// Board after each ply; `snapshots[i]` follows `tokens[i]`.
    pub snapshots: Vec<Board>,
    /// Result token found in the move text, if any.
    pub result: Option<Outcome>,
}

impl ReplayedGame {
    pub fn final_board(&self) -> Option<&Board> {
        self.snapshots.last()
    }
}

/// Replays move text from the standard starting position.
pub fn replay(text: &str) -> Result<ReplayedGame, ReplayError> {
    let tokens = tokenize(text)?;
    let snapshots = GameReplay::new().play_all(&tokens)?;
    debug!(plies = snapshots.len(), "replayed game");

    Ok(ReplayedGame {
        tokens,
        snapshots,
        result: find_result(text),
    })
}

/// Board snapshots, one per ply, for a move list played from the start.
pub fn reconstruct(text: &str) -> Result<Vec<Board>, ReplayError> {
    replay(text).map(|game| game.snapshots)
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
