//! Terminal UI: board view with cursor-driven move entry, plus save/load
//! bindings for the running game.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
