//! Click-chess GUI
//!
//! Renders the 8x8 grid, forwards square clicks to the core session, and
//! reflects whose turn it is and who has won.

mod app;
mod board;
mod styles;

use app::ChessApp;
use iced::application;

fn main() -> iced::Result {
    application("Click Chess", ChessApp::update, ChessApp::view)
        .theme(ChessApp::theme)
        .window_size((840.0, 640.0))
        .run_with(ChessApp::new)
}
