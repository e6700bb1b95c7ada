//! # Fox and Hounds
//!
//! A two-sided pursuit game on an N×N board: a single fox against a row of
//! hounds, all moving diagonally. The fox wins by reaching the hounds' home
//! row; the hounds win by encircling the fox. Ships with a terminal UI
//! built with Ratatui and a flat-text save format.
//!
//! ## Modules
//!
//! - [`game`] — Rules engine: coordinates, placement, move legality, win
//!   detection, game state
//! - [`save`] — Text-record persistence of a running game
//! - [`ui`] — Terminal UI: board view and move entry
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod save;
pub mod ui;
