//! Styling constants and piece glyphs

use clickchess_core::{Color as PieceColor, PieceKind};
use iced::Color;

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(0.94, 0.85, 0.71); // Wheat
pub const DARK_SQUARE: Color = Color::from_rgb(0.71, 0.53, 0.39); // Sienna
pub const SELECTED_SQUARE: Color = Color::from_rgb(0.68, 0.85, 0.37); // Yellow-green
pub const LAST_MOVE_SQUARE: Color = Color::from_rgba(0.9, 0.9, 0.0, 0.4); // Yellow overlay

// Dimensions
pub const SQUARE_SIZE: f32 = 70.0;
pub const PANEL_WIDTH: f32 = 220.0;

/// Display glyph for a piece, keyed by its tag.
pub fn piece_char(color: PieceColor, kind: PieceKind) -> &'static str {
    match (color, kind) {
        (PieceColor::White, PieceKind::King) => "\u{2654}",
        (PieceColor::White, PieceKind::Queen) => "\u{2655}",
        (PieceColor::White, PieceKind::Rook) => "\u{2656}",
        (PieceColor::White, PieceKind::Bishop) => "\u{2657}",
        (PieceColor::White, PieceKind::Knight) => "\u{2658}",
        (PieceColor::White, PieceKind::Pawn) => "\u{2659}",
        (PieceColor::Black, PieceKind::King) => "\u{265A}",
        (PieceColor::Black, PieceKind::Queen) => "\u{265B}",
        (PieceColor::Black, PieceKind::Rook) => "\u{265C}",
        (PieceColor::Black, PieceKind::Bishop) => "\u{265D}",
        (PieceColor::Black, PieceKind::Knight) => "\u{265E}",
        (PieceColor::Black, PieceKind::Pawn) => "\u{265F}",
    }
}
