//! The flat one-line save record: `<side> <hound1> ... <houndK> <fox>`,
//! whitespace separated, with each position in coordinate text form.

use crate::error::SaveError;
use crate::game::{placement, Coord, Roster, Side};
use std::collections::HashSet;

/// Number of whitespace-separated tokens a record carries for a board of
/// the given dimension: side marker + hounds + fox.
pub fn token_count(dim: usize) -> usize {
    placement::hound_count(dim) + 2
}

/// Encode roster and side to move as a single record line.
pub fn encode(roster: &Roster, side: Side) -> String {
    let mut line = side.symbol().to_string();
    for pos in roster.positions() {
        line.push(' ');
        line.push_str(&pos.to_string());
    }
    line
}

/// Parse a record line back into a roster and side to move.
///
/// The expected token count comes from the configured `dim`, never from the
/// record itself, so a record for a differently-sized board fails instead
/// of silently producing a different game. All checks run before anything
/// is returned; a failure yields no partial roster.
pub fn parse(line: &str, dim: usize) -> Result<(Roster, Side), SaveError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let expected = token_count(dim);
    if tokens.len() != expected {
        return Err(SaveError::TokenCount {
            dim,
            expected,
            found: tokens.len(),
        });
    }

    let side = match tokens[0] {
        "F" => Side::Fox,
        "H" => Side::Hound,
        other => return Err(SaveError::Side(other.to_string())),
    };

    let mut positions = Vec::with_capacity(tokens.len() - 1);
    let mut seen = HashSet::new();
    for token in &tokens[1..] {
        let pos = Coord::parse(token, dim)?;
        if !seen.insert(pos) {
            return Err(SaveError::Duplicate(pos.to_string()));
        }
        positions.push(pos);
    }

    let fox = positions.pop().ok_or(SaveError::TokenCount {
        dim,
        expected,
        found: tokens.len(),
    })?;
    Ok((Roster::new(positions, fox), side))
}
