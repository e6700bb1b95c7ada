//! Persistence of games as flat text records.

pub mod record;

use crate::error::SaveError;
use crate::game::{placement, GameState, Roster, Side};
use std::fs;
use std::path::Path;

/// Save a game to a file as a single record line.
///
/// The roster length is checked against the state's board dimension before
/// anything is written; a mismatch is a caller error.
pub fn save_game(path: &Path, state: &GameState) -> Result<(), SaveError> {
    let expected = placement::hound_count(state.dim()) + 1;
    let found = state.roster().len();
    if found != expected {
        return Err(SaveError::RosterMismatch {
            dim: state.dim(),
            expected,
            found,
        });
    }

    let line = record::encode(state.roster(), state.turn());
    fs::write(path, line).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a game record from a file for a board of the configured dimension.
///
/// Returns the loaded roster and side to move; the caller installs them
/// into its game state only on success, so a failed load leaves the running
/// game untouched.
pub fn load_game(path: &Path, dim: usize) -> Result<(Roster, Side), SaveError> {
    let content = fs::read_to_string(path).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    record::parse(content.lines().next().unwrap_or(""), dim)
}
