//! Chess board widget rendering

use crate::styles::{self, SQUARE_SIZE};
use clickchess_core::Game;
use iced::widget::{button, column, container, row, text};
use iced::{Color, Element, Length};

/// Message type for board interactions
#[derive(Debug, Clone)]
pub enum BoardMessage {
    SquareClicked(u8),
}

/// Renders the chess board
pub struct BoardView<'a> {
    game: &'a Game,
    flipped: bool,
    last_move: Option<(u8, u8)>,
}

impl<'a> BoardView<'a> {
    pub fn new(game: &'a Game, flipped: bool, last_move: Option<(u8, u8)>) -> Self {
        Self {
            game,
            flipped,
            last_move,
        }
    }

    /// Create the board view element
    pub fn view(&self) -> Element<'a, BoardMessage> {
        let mut board_column = column![].spacing(0);

        // Row 0 is black's back row, drawn at the top unless flipped.
        for row_idx in 0..8 {
            let display_row = if self.flipped { 7 - row_idx } else { row_idx };
            let mut rank_row = row![].spacing(0);

            for col_idx in 0..8 {
                let display_col = if self.flipped { 7 - col_idx } else { col_idx };
                let sq = (display_row * 8 + display_col) as u8;

                let square = self.render_square(sq, display_row, display_col);
                rank_row = rank_row.push(square);
            }

            board_column = board_column.push(rank_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: Color::from_rgb(0.3, 0.3, 0.3),
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square(&self, sq: u8, row: usize, col: usize) -> Element<'a, BoardMessage> {
        let is_light = (row + col) % 2 == 0;
        let mut bg_color = if is_light {
            styles::LIGHT_SQUARE
        } else {
            styles::DARK_SQUARE
        };

        // Highlight selected square
        if self.game.selected_square() == Some(sq) {
            bg_color = styles::SELECTED_SQUARE;
        }

        // Highlight last move
        if let Some((from, to)) = self.last_move {
            if sq == from || sq == to {
                bg_color = blend_colors(bg_color, styles::LAST_MOVE_SQUARE);
            }
        }

        let content: Element<'a, BoardMessage> = match self.game.piece_at(sq) {
            Some(p) => text(styles::piece_char(p.color, p.kind))
                .size(SQUARE_SIZE * 0.75)
                .center()
                .into(),
            None => text("").into(),
        };

        button(
            container(content)
                .width(SQUARE_SIZE)
                .height(SQUARE_SIZE)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(SQUARE_SIZE)
        .height(SQUARE_SIZE)
        .style(move |_theme, status| {
            let hover_overlay = match status {
                button::Status::Hovered => 0.1,
                button::Status::Pressed => 0.2,
                _ => 0.0,
            };
            button::Style {
                background: Some(iced::Background::Color(if hover_overlay > 0.0 {
                    blend_colors(bg_color, Color::from_rgba(1.0, 1.0, 1.0, hover_overlay))
                } else {
                    bg_color
                })),
                border: iced::Border::default(),
                text_color: Color::BLACK,
                ..Default::default()
            }
        })
        .on_press(BoardMessage::SquareClicked(sq))
        .into()
    }
}

/// Blend two colors together
fn blend_colors(base: Color, overlay: Color) -> Color {
    let alpha = overlay.a;
    Color::from_rgb(
        base.r * (1.0 - alpha) + overlay.r * alpha,
        base.g * (1.0 - alpha) + overlay.g * alpha,
        base.b * (1.0 - alpha) + overlay.b * alpha,
    )
}
