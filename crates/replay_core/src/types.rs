use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// +1 for white, -1 for black. White pawns advance toward row 0.
    pub fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    /// Row holding this side's king and rooks at the start.
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
    /// Row holding this side's pawns at the start.
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Magnitude used in the signed board encoding (pawn = 1 .. king = 6).
    pub fn value(self) -> i8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Bishop => 2,
            PieceKind::Knight => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    pub fn idx(self) -> usize {
        self.value() as usize - 1
    }

    pub fn from_value(value: i8) -> Option<PieceKind> {
        match value {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Bishop),
            3 => Some(PieceKind::Knight),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// SAN piece letter. Pawns have none.
    pub fn from_letter(letter: char) -> Option<PieceKind> {
        match letter {
            'K' => Some(PieceKind::King),
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'N' => Some(PieceKind::Knight),
            _ => None,
        }
    }

    pub fn letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => None,
            PieceKind::Bishop => Some('B'),
            PieceKind::Knight => Some('N'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Signed occupancy code: kind magnitude times color sign.
    pub fn code(self) -> i8 {
        self.kind.value() * self.color.sign()
    }

    pub fn from_code(code: i8) -> Option<Piece> {
        let kind = PieceKind::from_value(code.abs())?;
        let color = if code > 0 { Color::White } else { Color::Black };
        Some(Piece { color, kind })
    }

    /// FEN letter, uppercase for white.
    pub fn fen_char(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// A board coordinate. `rank` is the row index: 0 is the eighth rank,
/// 7 is the first rank. `file` 0..7 is 'a'..'h'.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub rank: u8,
    pub file: u8,
}

impl Square {
    pub fn new(rank: u8, file: u8) -> Option<Square> {
        if rank < 8 && file < 8 {
            Some(Square { rank, file })
        } else {
            None
        }
    }

    pub fn from_index(idx: usize) -> Option<Square> {
        if idx >= 64 {
            return None;
        }
        Square::new((idx / 8) as u8, (idx % 8) as u8)
    }

    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Same square seen from the other side of the board.
    pub fn mirrored(self) -> Square {
        Square {
            rank: 7 - self.rank,
            file: self.file,
        }
    }

    /// Parses a coordinate like "e4".
    pub fn from_coord(coord: &str) -> Option<Square> {
        let b = coord.as_bytes();
        if b.len() != 2 {
            return None;
        }
        Square::new(rank_from_char(b[1] as char)?, file_from_char(b[0] as char)?)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).filter_map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", file_to_char(self.file), rank_to_char(self.rank))
    }
}

// Helpers
pub fn file_from_char(c: char) -> Option<u8> {
    if ('a'..='h').contains(&c) {
        Some(c as u8 - b'a')
    } else {
        None
    }
}
pub fn rank_from_char(c: char) -> Option<u8> {
    if ('1'..='8').contains(&c) {
        Some(b'8' - c as u8)
    } else {
        None
    }
}
pub fn file_to_char(file: u8) -> char {
    (b'a' + file) as char
}
pub fn rank_to_char(rank: u8) -> char {
    (b'8' - rank) as char
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
