//! JSON-lines output of encoded games

use std::io::{self, BufRead, Write};

use crate::runner::EncodedGame;

/// Writes one JSON object per game, newline separated.
pub fn write_jsonl<W: Write>(mut writer: W, games: &[EncodedGame]) -> io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut writer, game)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Reads back what [`write_jsonl`] wrote. Blank lines are ignored.
pub fn read_jsonl<R: BufRead>(reader: R) -> io::Result<Vec<EncodedGame>> {
    let mut games = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        games.push(serde_json::from_str(&line)?);
    }
    Ok(games)
}
