//! Move legality as pure functions over the board.
//!
//! Deliberately simplified rules: no castling, no en passant, no promotion,
//! and no check-safety filtering. A move is judged by piece geometry, path
//! clearance, and the no-self-capture rule alone.

use crate::board::Board;
use crate::types::*;

/// True iff the piece belongs to the player whose turn it is.
pub fn belongs_to_mover(piece: Piece, turn: Color) -> bool {
    piece.color == turn
}

/// Is moving the occupant of `from` to `to` legal for its kind?
///
/// Total over any pair of in-range squares: an empty `from` or `from == to`
/// simply reports illegal.
pub fn is_legal(board: &Board, from: u8, to: u8) -> bool {
    let piece = match board.piece_at(from) {
        Some(p) => p,
        None => return false,
    };
    if from == to {
        return false;
    }
    let target = board.piece_at(to);
    // Never onto one's own piece
    if let Some(t) = target
        && t.color == piece.color
    {
        return false;
    }

    let (fr, fc) = (row_of(from), col_of(from));
    let (tr, tc) = (row_of(to), col_of(to));
    let d_row = (tr - fr).abs();
    let d_col = (tc - fc).abs();

    match piece.kind {
        PieceKind::Pawn => {
            // White advances toward row 0, black toward row 7.
            let dir: i8 = match piece.color {
                Color::White => -1,
                Color::Black => 1,
            };
            let home: i8 = match piece.color {
                Color::White => 6,
                Color::Black => 1,
            };
            if tc == fc && target.is_none() {
                tr == fr + dir
                    || (fr == home
                        && tr == fr + 2 * dir
                        && sq(fr + dir, fc).is_some_and(|mid| board.piece_at(mid).is_none()))
            } else {
                // Diagonal capture; self-capture already excluded above
                d_col == 1 && tr == fr + dir && target.is_some()
            }
        }
        PieceKind::Knight => (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2),
        PieceKind::Bishop => d_row == d_col && path_clear(board, from, to),
        PieceKind::Rook => (fr == tr || fc == tc) && path_clear(board, from, to),
        PieceKind::Queen => (fr == tr || fc == tc || d_row == d_col) && path_clear(board, from, to),
        PieceKind::King => d_row <= 1 && d_col <= 1,
    }
}

/// Walk one square at a time from `from` toward `to` and require every
/// strictly-intervening square to be empty. Destination occupancy is the
/// caller's concern. Knights never call this.
pub fn path_clear(board: &Board, from: u8, to: u8) -> bool {
    let (tr, tc) = (row_of(to), col_of(to));
    let row_step = (tr - row_of(from)).signum();
    let col_step = (tc - col_of(from)).signum();

    let mut r = row_of(from) + row_step;
    let mut c = col_of(from) + col_step;
    while (r, c) != (tr, tc) {
        match sq(r, c) {
            Some(s) if board.piece_at(s).is_none() => {
                r += row_step;
                c += col_step;
            }
            _ => return false,
        }
    }
    true
}

/// Terminal check after a move: if the king of the side about to move is
/// gone from the board, the side that just moved has won.
pub fn winner_after(board: &Board, turn_just_moved: Color) -> Option<Color> {
    match board.king_sq(turn_just_moved.other()) {
        Some(_) => None,
        None => Some(turn_just_moved),
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
