//! GUI module for the Gomoku game
//!
//! Native window built on egui/eframe: a setup screen, the board with a
//! side panel, and a game-over window. AI moves are searched on a worker
//! thread so the window stays responsive.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::{GameResult, GameState};
