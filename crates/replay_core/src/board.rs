use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::types::*;

/// Which rook a castle uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Files the rook leaves and lands on, and the file the king lands on.
    fn files(self) -> (u8, u8, u8) {
        match self {
            CastleSide::Kingside => (7, 5, 6),
            CastleSide::Queenside => (0, 3, 2),
        }
    }
}

const KING_FILE: u8 = 4;

/// An 8x8 grid of owned cells, row 0 being the eighth rank.
///
/// Cloning a board is the snapshot boundary: every ply of a replay pushes
/// its own copy so later mutation never leaks into earlier snapshots.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        // Pawns
        for file in 0..8 {
            b.cells[8 + file] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.cells[48 + file] = Some(Piece::new(Color::White, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back.iter().enumerate() {
            b.cells[file] = Some(Piece::new(Color::Black, kind));
            b.cells[56 + file] = Some(Piece::new(Color::White, kind));
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.cells[sq.index()] = pc;
    }

    /// Signed occupancy code of a square, 0 when empty.
    pub fn code_at(&self, sq: Square) -> i8 {
        self.piece_at(sq).map_or(0, Piece::code)
    }

    /// Every square holding exactly `piece`, in row-major order.
    pub fn squares_of(&self, piece: Piece) -> Vec<Square> {
        Square::all()
            .filter(|&sq| self.piece_at(sq) == Some(piece))
            .collect()
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|pc| (sq, pc)))
    }

    /// Moves `piece` from `from` to `to`, overwriting whatever stood there.
    pub fn apply_move(&mut self, from: Square, to: Square, piece: Piece) {
        self.set_piece(from, None);
        self.set_piece(to, Some(piece));
    }

    /// Relocates king and rook on `color`'s back rank. Castling rights,
    /// emptiness of the squares between and check are not examined.
    pub fn apply_castle(&mut self, color: Color, side: CastleSide) {
        let rank = color.back_rank();
        let (rook_from, rook_to, king_to) = side.files();
        let at = |file| Square { rank, file };

        self.set_piece(at(rook_from), None);
        self.set_piece(at(KING_FILE), None);
        self.set_piece(at(rook_to), Some(Piece::new(color, PieceKind::Rook)));
        self.set_piece(at(king_to), Some(Piece::new(color, PieceKind::King)));
    }

    /// Signed 8x8 view: 0 empty, ±1..6 pawn..king, positive for white.
    pub fn to_codes(&self) -> [[i8; 8]; 8] {
        let mut rows = [[0i8; 8]; 8];
        for sq in Square::all() {
            rows[sq.rank as usize][sq.file as usize] = self.code_at(sq);
        }
        rows
    }

    pub fn from_codes(rows: &[[i8; 8]; 8]) -> Result<Self, BoardError> {
        let mut b = Board::empty();
        for (rank, row) in rows.iter().enumerate() {
            for (file, &code) in row.iter().enumerate() {
                if code == 0 {
                    continue;
                }
                let pc = Piece::from_code(code).ok_or(BoardError::InvalidCode(code))?;
                b.cells[rank * 8 + file] = Some(pc);
            }
        }
        Ok(b)
    }

    /// Piece-placement field of a FEN string, eighth rank first.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in 0..8u8 {
            if rank > 0 {
                out.push('/');
            }
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(Square { rank, file }) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
        }
        out
    }

    /// Parses a FEN piece-placement field (only the part before the first space).
    pub fn from_placement(placement: &str) -> Result<Self, BoardError> {
        let field = placement.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = field.split('/').collect();
        if rows.len() != 8 {
            return Err(BoardError::RankCount(rows.len()));
        }

        let mut b = Board::empty();
        for (rank, row) in rows.iter().enumerate() {
            let mut file = 0usize;
            for ch in row.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as usize;
                } else {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => return Err(BoardError::InvalidPieceChar(ch)),
                    };
                    if file >= 8 {
                        return Err(BoardError::RankWidth(rank));
                    }
                    b.cells[rank * 8 + file] = Some(Piece::new(color, kind));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(BoardError::RankWidth(rank));
            }
        }
        Ok(b)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8u8 {
            write!(f, "{} ", rank_to_char(rank))?;
            for file in 0..8u8 {
                let c = self
                    .piece_at(Square { rank, file })
                    .map_or('.', Piece::fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
