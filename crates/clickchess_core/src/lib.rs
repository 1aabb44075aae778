//! Game-state and move-legality core for a click-driven, simplified
//! two-player chess. Presentation layers depend on this crate and drive it
//! through [`Game::activate`].

pub mod board;
pub mod game;
pub mod rules;
pub mod types;

pub use board::*;
pub use game::*;
pub use rules::*;
pub use types::*;
