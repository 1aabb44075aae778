use crate::types::*;

/// The authoritative game board: 64 optional pieces plus whose turn it is.
///
/// Mutated during play only through [`Board::apply_move`]; everything else
/// is lookup or setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub squares: [Option<Piece>; 64],
    pub side_to_move: Color,
}

impl Board {
    pub fn startpos() -> Self {
        let mut b = Board {
            squares: [None; 64],
            side_to_move: Color::White,
        };

        // Pawns: black on row 1, white on row 6
        for c in 0..8 {
            b.squares[8 + c] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
            b.squares[48 + c] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
        }
        // Back rows
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
        for (c, &kind) in back.iter().enumerate() {
            b.squares[c] = Some(Piece {
                color: Color::Black,
                kind,
            });
            b.squares[56 + c] = Some(Piece {
                color: Color::White,
                kind,
            });
        }
        b
    }

    /// Build a board from the piece-placement and side-to-move fields of a
    /// FEN string. Test and demo setup only, never called during play.
    pub fn from_fen(fen: &str) -> Self {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        assert!(
            parts.len() >= 2,
            "Invalid FEN: expected piece placement and side to move"
        );

        let ranks: Vec<&str> = parts[0].split('/').collect();
        assert!(ranks.len() == 8, "Invalid FEN board section");

        let mut squares = [None; 64];
        // FEN lists rank 8 first, which is row 0 here.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as i8;
                } else {
                    let color = if ch.is_uppercase() {
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
                        _ => panic!("Invalid piece char in FEN: {}", ch),
                    };
                    let s = sq(row as i8, col).expect("Square out of bounds while parsing FEN");
                    squares[s as usize] = Some(Piece { color, kind });
                    col += 1;
                }
                assert!(col <= 8, "Too many files in FEN rank");
            }
            assert!(col == 8, "Not enough files in FEN rank");
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => panic!("Invalid side to move in FEN: {}", other),
        };

        Board {
            squares,
            side_to_move,
        }
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.squares[sq as usize] = pc;
    }

    /// Relocate the occupant of `from` to `to`, capturing by overwrite.
    ///
    /// No validation and no turn flip; legality is the caller's problem.
    pub fn apply_move(&mut self, from: u8, to: u8) {
        self.squares[to as usize] = self.squares[from as usize].take();
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        for i in 0..64 {
            if let Some(pc) = self.squares[i]
                && pc.color == c
                && pc.kind == PieceKind::King
            {
                return Some(i as u8);
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
