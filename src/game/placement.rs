use super::{Coord, Roster};
use crate::error::DimensionError;

/// Default board dimension when none (or an invalid one) is supplied.
pub const DEFAULT_DIM: usize = 8;
/// Minimum supported board dimension.
pub const MIN_DIM: usize = 4;
/// Maximum supported board dimension (columns A through Z).
pub const MAX_DIM: usize = 26;

/// Number of hounds for a given board dimension.
pub fn hound_count(dim: usize) -> usize {
    dim / 2
}

/// Starting column of the fox: half the board width, shifted one file when
/// the parity tie-break calls for it. Anchors: E for dim 8, C for dim 4,
/// O for dim 26.
fn fox_column(dim: usize) -> usize {
    let half = dim / 2;
    if dim % 2 == 0 {
        if half % 2 == 0 {
            half
        } else {
            half + 1
        }
    } else if half % 2 == 1 {
        half
    } else {
        half + 1
    }
}

/// Build the deterministic starting roster for a board of the given
/// dimension: `dim/2` hounds on row 1 at columns B, D, F, ... and the fox
/// on the far row near the center file.
pub fn initial_roster(dim: usize) -> Result<Roster, DimensionError> {
    if !(MIN_DIM..=MAX_DIM).contains(&dim) {
        return Err(DimensionError(dim));
    }

    let hounds = (0..hound_count(dim))
        .map(|i| Coord::new(2 * i + 1, 1))
        .collect();
    let fox = Coord::new(fox_column(dim), dim);

    Ok(Roster::new(hounds, fox))
}
