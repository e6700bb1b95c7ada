use super::{Coord, Roster, Side};
use crate::error::CoordError;

/// Validate a move given the raw coordinate tokens.
///
/// A malformed or out-of-range token is a caller error and propagates as
/// [`CoordError`]; a well-formed move that merely breaks the rules yields
/// `Ok(false)` so the driver can re-prompt.
pub fn validate_move(
    dim: usize,
    roster: &Roster,
    side: Side,
    origin: &str,
    dest: &str,
) -> Result<bool, CoordError> {
    let origin = Coord::parse(origin, dim)?;
    let dest = Coord::parse(dest, dim)?;
    Ok(is_legal(dim, roster, side, origin, dest))
}

/// Whether moving the piece on `origin` to `dest` is legal for `side`.
///
/// Checks, in order: both squares on the board, origin occupied,
/// destination free (no stacking, no captures), the origin piece belongs
/// to `side`, diagonal adjacency, and the side's direction rule (hounds
/// may only advance toward higher rows; the fox moves in any diagonal
/// direction).
pub fn is_legal(dim: usize, roster: &Roster, side: Side, origin: Coord, dest: Coord) -> bool {
    if !origin.in_bounds(dim) || !dest.in_bounds(dim) {
        return false;
    }
    if !roster.occupied(origin) {
        return false;
    }
    if roster.occupied(dest) {
        return false;
    }

    match side {
        Side::Fox => {
            if origin != roster.fox() {
                return false;
            }
        }
        Side::Hound => {
            if !roster.hound_at(origin) {
                return false;
            }
        }
    }

    // Diagonal adjacency: both axes move by exactly one step. This also
    // rules out a zero-displacement move.
    if origin.col.abs_diff(dest.col) != 1 || origin.row.abs_diff(dest.row) != 1 {
        return false;
    }

    // Hounds never move back toward their home row.
    if side == Side::Hound && dest.row != origin.row + 1 {
        return false;
    }

    true
}
