//! The select-then-target session state machine.

use crate::board::Board;
use crate::rules::{belongs_to_mover, is_legal, winner_after};
use crate::types::{Color, Piece};

/// Outcome of a single square activation, so a UI can repaint minimally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Nothing changed (empty/opponent square while idle, or game over).
    Ignored,
    /// The square is now the selection.
    Selected(u8),
    /// The selection was cleared without a move.
    Deselected,
    /// A legal move was applied; `winner` is set when it captured the king.
    Moved {
        from: u8,
        to: u8,
        winner: Option<Color>,
    },
}

/// One game session: the board, the transient selection, and the result.
///
/// All mutation goes through [`Game::activate`] and [`Game::reset`]; no
/// sequence of activations can panic.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    selected: Option<u8>,
    winner: Option<Color>,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::startpos(),
            selected: None,
            winner: None,
        }
    }

    /// Start from an arbitrary position (tests, demos).
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            selected: None,
            winner: None,
        }
    }

    /// Back to the starting position, white to move.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Drive the state machine with one square click.
    pub fn activate(&mut self, sq: u8) -> Activation {
        // A finished game only resets, it never continues.
        if self.winner.is_some() {
            return Activation::Ignored;
        }
        let turn = self.board.side_to_move;
        match self.selected {
            None => {
                if self
                    .board
                    .piece_at(sq)
                    .is_some_and(|p| belongs_to_mover(p, turn))
                {
                    self.selected = Some(sq);
                    Activation::Selected(sq)
                } else {
                    Activation::Ignored
                }
            }
            Some(from) if from == sq => {
                self.selected = None;
                Activation::Deselected
            }
            Some(from) => {
                if is_legal(&self.board, from, sq) {
                    self.board.apply_move(from, sq);
                    self.selected = None;
                    self.winner = winner_after(&self.board, turn);
                    if self.winner.is_none() {
                        self.board.side_to_move = turn.other();
                    }
                    Activation::Moved {
                        from,
                        to: sq,
                        winner: self.winner,
                    }
                } else if self
                    .board
                    .piece_at(sq)
                    .is_some_and(|p| belongs_to_mover(p, turn))
                {
                    // Illegal target but an own piece: switch the selection
                    self.selected = Some(sq);
                    Activation::Selected(sq)
                } else {
                    self.selected = None;
                    Activation::Deselected
                }
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board.piece_at(sq)
    }
    pub fn current_turn(&self) -> Color {
        self.board.side_to_move
    }
    pub fn selected_square(&self) -> Option<u8> {
        self.selected
    }
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
