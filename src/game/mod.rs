//! Core Fox and Hounds rules engine: board coordinates, initial placement,
//! move legality, win detection, and the game state aggregate.

mod coord;
pub mod placement;
mod roster;
pub mod rules;
mod side;
mod state;
pub mod win;

pub use coord::Coord;
pub use placement::{initial_roster, DEFAULT_DIM, MAX_DIM, MIN_DIM};
pub use roster::Roster;
pub use rules::{is_legal, validate_move};
pub use side::Side;
pub use state::{GameOutcome, GameState, VacantOrigin};
