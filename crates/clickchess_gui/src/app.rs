//! Main application state and logic

use crate::board::{BoardMessage, BoardView};
use crate::styles::PANEL_WIDTH;

use clickchess_core::{Activation, Color, Game};
use iced::widget::{button, column, container, horizontal_rule, row, text, vertical_space};
use iced::{Element, Length, Task, Theme};

/// Main application state
pub struct ChessApp {
    /// Game session
    game: Game,
    /// Board flipped?
    board_flipped: bool,
    /// Last applied move (for highlighting)
    last_move: Option<(u8, u8)>,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Board interaction
    Board(BoardMessage),

    // Game controls
    NewGame,
    FlipBoard,
}

impl ChessApp {
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                game: Game::new(),
                board_flipped: false,
                last_move: None,
            },
            Task::none(),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Board(BoardMessage::SquareClicked(sq)) => {
                if let Activation::Moved { from, to, .. } = self.game.activate(sq) {
                    self.last_move = Some((from, to));
                }
                Task::none()
            }

            Message::NewGame => {
                self.game.reset();
                self.last_move = None;
                Task::none()
            }

            Message::FlipBoard => {
                self.board_flipped = !self.board_flipped;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let board = BoardView::new(&self.game, self.board_flipped, self.last_move)
            .view()
            .map(Message::Board);

        let panel = self.control_panel();

        row![
            board,
            container(panel)
                .width(PANEL_WIDTH)
                .height(Length::Fill)
                .padding(15),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    /// Render the control panel
    fn control_panel(&self) -> Element<'_, Message> {
        let new_game_btn = button(text("New Game"))
            .on_press(Message::NewGame)
            .style(button::primary)
            .width(Length::Fill);

        let flip_btn = button(text("Flip Board"))
            .on_press(Message::FlipBoard)
            .style(button::secondary)
            .width(Length::Fill);

        let status = match self.game.winner() {
            Some(Color::White) => "White wins!".to_string(),
            Some(Color::Black) => "Black wins!".to_string(),
            None => {
                let side = if self.game.current_turn() == Color::White {
                    "White"
                } else {
                    "Black"
                };
                format!("{} to move", side)
            }
        };

        column![
            new_game_btn,
            flip_btn,
            vertical_space().height(20),
            horizontal_rule(1),
            vertical_space().height(10),
            text(status).size(18),
        ]
        .spacing(5)
        .into()
    }
}
