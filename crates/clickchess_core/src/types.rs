#[derive(Clone, Copy, Debug, PartialEq, Eq)]
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
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

// Helpers
//
// Squares are u8 indices 0..63, row-major from the top of the displayed
// grid: row 0 is black's back row, col 0 is file 'a'.
pub fn row_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn col_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn sq(row: i8, col: i8) -> Option<u8> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row as u8) * 8 + (col as u8))
    } else {
        None
    }
}

pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'8' - (sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let col = f - b'a';
    let row = b'8' - r;
    Some(row * 8 + col)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
