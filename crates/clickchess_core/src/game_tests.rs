use super::*;
use crate::board::Board;
use crate::types::{PieceKind, coord_to_sq};

fn at(coord: &str) -> u8 {
    coord_to_sq(coord).unwrap()
}

#[test]
fn test_new_game_state() {
    let g = Game::new();
    assert_eq!(g.current_turn(), Color::White);
    assert_eq!(g.selected_square(), None);
    assert_eq!(g.winner(), None);
    assert!(!g.is_over());
    assert_eq!(g.board(), &Board::startpos());
}

#[test]
fn test_idle_ignores_empty_and_opponent_squares() {
    let mut g = Game::new();
    assert_eq!(g.activate(at("e4")), Activation::Ignored);
    assert_eq!(g.activate(at("e7")), Activation::Ignored);
    assert_eq!(g.selected_square(), None);
    assert_eq!(g.current_turn(), Color::White);
    assert_eq!(g.board(), &Board::startpos());
}

#[test]
fn test_reclick_deselects_without_board_change() {
    let mut g = Game::new();
    assert_eq!(g.activate(at("e2")), Activation::Selected(at("e2")));
    assert_eq!(g.selected_square(), Some(at("e2")));
    assert_eq!(g.activate(at("e2")), Activation::Deselected);
    assert_eq!(g.selected_square(), None);
    assert_eq!(g.board(), &Board::startpos());
}

#[test]
fn test_legal_move_applies_and_flips_turn() {
    let mut g = Game::new();
    g.activate(at("e2"));
    assert_eq!(
        g.activate(at("e4")),
        Activation::Moved {
            from: at("e2"),
            to: at("e4"),
            winner: None,
        }
    );
    assert_eq!(g.piece_at(at("e2")), None);
    let moved = g.piece_at(at("e4")).unwrap();
    assert_eq!(moved.color, Color::White);
    assert_eq!(moved.kind, PieceKind::Pawn);
    assert_eq!(g.current_turn(), Color::Black);
    assert_eq!(g.selected_square(), None);
}

#[test]
fn test_illegal_target_reselects_own_piece() {
    let mut g = Game::new();
    g.activate(at("e2"));
    // d2 is no legal destination for the e2 pawn, but it is an own piece
    assert_eq!(g.activate(at("d2")), Activation::Selected(at("d2")));
    assert_eq!(g.selected_square(), Some(at("d2")));
    assert_eq!(g.current_turn(), Color::White);
}

#[test]
fn test_illegal_target_clears_selection() {
    let mut g = Game::new();
    g.activate(at("e2"));
    assert_eq!(g.activate(at("e5")), Activation::Deselected);
    assert_eq!(g.selected_square(), None);
    assert_eq!(g.current_turn(), Color::White);
    assert_eq!(g.board(), &Board::startpos());
}

#[test]
fn test_opponent_piece_not_selectable_after_move() {
    let mut g = Game::new();
    g.activate(at("e2"));
    g.activate(at("e4"));
    // White piece while black is to move
    assert_eq!(g.activate(at("d2")), Activation::Ignored);
    assert_eq!(g.selected_square(), None);
}

#[test]
fn test_blocked_double_step_keeps_turn() {
    // After 1. e4, with e6 artificially occupied, e7-e5 must be rejected
    let board = Board::from_fen("rnbqkbnr/pppppppp/4N3/8/4P3/8/PPPP1PPP/RNBQKB1R b");
    let mut g = Game::from_board(board);
    assert_eq!(g.activate(at("e7")), Activation::Selected(at("e7")));
    assert_eq!(g.activate(at("e5")), Activation::Deselected);
    assert_eq!(g.current_turn(), Color::Black);
    assert_eq!(g.piece_at(at("e5")), None);
}

#[test]
fn test_king_capture_ends_game() {
    let board = Board::from_fen("4k3/8/8/8/4R3/8/8/4K3 w");
    let mut g = Game::from_board(board);
    g.activate(at("e4"));
    assert_eq!(
        g.activate(at("e8")),
        Activation::Moved {
            from: at("e4"),
            to: at("e8"),
            winner: Some(Color::White),
        }
    );
    assert!(g.is_over());
    assert_eq!(g.winner(), Some(Color::White));
    // Turn does not flip into a finished game
    assert_eq!(g.current_turn(), Color::White);

    // Terminal state ignores all further input until reset
    assert_eq!(g.activate(at("e1")), Activation::Ignored);
    assert_eq!(g.activate(at("e8")), Activation::Ignored);

    g.reset();
    assert!(!g.is_over());
    assert_eq!(g.current_turn(), Color::White);
    assert_eq!(g.board(), &Board::startpos());
}

#[test]
fn test_activate_never_panics_over_random_clicks() {
    let mut g = Game::new();
    // A fixed pseudo-random walk over every square, twice
    for round in 0..2u8 {
        for s in 0..64u8 {
            g.activate((s.wrapping_mul(37).wrapping_add(round)) % 64);
        }
    }
}
