//! Move-text tokenizer.
//!
//! Splits PGN-style move text into [`MoveToken`]s. Move numbers, comments,
//! variations, NAGs and annotation glyphs are dropped; a result token ends
//! the move list.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::board::CastleSide;
use crate::error::NotationError;
use crate::types::*;

/// One SAN move. The destination is always the final file+rank pair; the
/// optional hints are whatever file and rank characters precede it.
/// Annotation glyphs may sit on either side of the check marker.
static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:([KQRBN])?([a-h])?([1-8])?(x)?([a-h])([1-8])|(O-O-O)|(O-O))[!?]*[+#]?[!?]*$")
        .expect("move grammar is a valid regex")
});

static MOVE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.+").expect("move number pattern is a valid regex"));

/// A non-castling move as written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanMove {
    pub kind: PieceKind,
    pub from_file: Option<u8>,
    pub from_rank: Option<u8>,
    pub capture: bool,
    pub to: Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveToken {
    Normal(SanMove),
    Castle(CastleSide),
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveToken::Castle(CastleSide::Kingside) => f.write_str("O-O"),
            MoveToken::Castle(CastleSide::Queenside) => f.write_str("O-O-O"),
            MoveToken::Normal(mv) => {
                if let Some(letter) = mv.kind.letter() {
                    write!(f, "{letter}")?;
                }
                if let Some(file) = mv.from_file {
                    write!(f, "{}", file_to_char(file))?;
                }
                if let Some(rank) = mv.from_rank {
                    write!(f, "{}", rank_to_char(rank))?;
                }
                if mv.capture {
                    f.write_str("x")?;
                }
                write!(f, "{}", mv.to)
            }
        }
    }
}

/// Game result as recorded in PGN.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "1-0")]
    WhiteWins,
    #[serde(rename = "0-1")]
    BlackWins,
    #[serde(rename = "1/2-1/2")]
    Draw,
    #[serde(rename = "*")]
    Unknown,
}

impl Outcome {
    pub fn from_token(token: &str) -> Option<Outcome> {
        match token {
            "1-0" => Some(Outcome::WhiteWins),
            "0-1" => Some(Outcome::BlackWins),
            "1/2-1/2" => Some(Outcome::Draw),
            "*" => Some(Outcome::Unknown),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::WhiteWins => "1-0",
            Outcome::BlackWins => "0-1",
            Outcome::Draw => "1/2-1/2",
            Outcome::Unknown => "*",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Splits a whole move list into tokens, stopping at the result token.
pub fn tokenize(text: &str) -> Result<Vec<MoveToken>, NotationError> {
    let cleaned = strip_comments_and_variations(text);
    let mut tokens = Vec::new();

    for word in cleaned.split_whitespace() {
        let word = MOVE_NUMBER_RE.replace(word, "");
        let word = word.trim_end_matches(|c| matches!(c, '!' | '?'));
        if word.is_empty() || word.starts_with('$') {
            continue;
        }
        if Outcome::from_token(word).is_some() {
            break;
        }
        tokens.push(parse_san(word, tokens.len())?);
    }

    Ok(tokens)
}

/// Parses a single move word. `position` is only used for error reporting.
pub fn parse_san(word: &str, position: usize) -> Result<MoveToken, NotationError> {
    let malformed = || NotationError::MalformedMoveText {
        word: word.to_owned(),
        position,
    };

    let Some(caps) = MOVE_RE.captures(word) else {
        return Err(match word.chars().next() {
            Some(c) if c.is_ascii_uppercase() && c != 'O' && PieceKind::from_letter(c).is_none() => {
                NotationError::UnknownPieceLetter {
                    letter: c,
                    word: word.to_owned(),
                }
            }
            _ => malformed(),
        });
    };

    if caps.get(7).is_some() {
        return Ok(MoveToken::Castle(CastleSide::Queenside));
    }
    if caps.get(8).is_some() {
        return Ok(MoveToken::Castle(CastleSide::Kingside));
    }

    let char_at = |i: usize| caps.get(i).and_then(|m| m.as_str().chars().next());

    let kind = match char_at(1) {
        Some(letter) => PieceKind::from_letter(letter).ok_or_else(malformed)?,
        None => PieceKind::Pawn,
    };
    let to = Square {
        rank: char_at(6).and_then(rank_from_char).ok_or_else(malformed)?,
        file: char_at(5).and_then(file_from_char).ok_or_else(malformed)?,
    };

    Ok(MoveToken::Normal(SanMove {
        kind,
        from_file: char_at(2).and_then(file_from_char),
        from_rank: char_at(3).and_then(rank_from_char),
        capture: caps.get(4).is_some(),
        to,
    }))
}

/// First result token found in a move list or an outcome line, outside
/// comments and variations.
pub fn find_result(text: &str) -> Option<Outcome> {
    strip_comments_and_variations(text)
        .split_whitespace()
        .map(|w| w.trim_matches(|c| matches!(c, '"' | '[' | ']' | ',' | ';')))
        .find_map(Outcome::from_token)
}

fn strip_comments_and_variations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' if brace_depth == 0 => paren_depth = paren_depth.saturating_add(1),
            ')' if brace_depth == 0 => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
        // keep words on either side of a comment apart
        if (ch == '}' || ch == ')') && brace_depth == 0 && paren_depth == 0 {
            out.push(' ');
        }
    }

    out
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod tests;
