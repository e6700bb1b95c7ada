use super::{initial_roster, Coord, Roster, Side};
use crate::error::DimensionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    FoxWin,
    HoundWin,
}

/// Error from [`GameState::apply_move`] when the origin square is vacant.
/// The driver is expected to validate moves first, so hitting this means a
/// driver bug rather than bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no piece at move origin")]
pub struct VacantOrigin;

/// Aggregate game state: the roster of pieces plus the side to move.
///
/// The state never validates moves itself; the driver runs the move
/// validator, applies the move here on success, then consults the win
/// evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    dim: usize,
    roster: Roster,
    turn: Side,
}

impl GameState {
    /// Create the initial state for a board of the given dimension. The fox
    /// moves first.
    pub fn initial(dim: usize) -> Result<Self, DimensionError> {
        Ok(GameState {
            dim,
            roster: initial_roster(dim)?,
            turn: Side::Fox,
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Apply an already-validated move: relocate the piece on `origin` and
    /// flip the side to move. On a vacant origin nothing changes.
    pub fn apply_move(&mut self, origin: Coord, dest: Coord) -> Result<(), VacantOrigin> {
        if !self.roster.relocate(origin, dest) {
            return Err(VacantOrigin);
        }
        self.turn = self.turn.other();
        Ok(())
    }

    /// Replace roster and side in one step, used when loading a saved game.
    pub fn restore(&mut self, roster: Roster, turn: Side) {
        self.roster = roster;
        self.turn = turn;
    }

    /// Check both win conditions.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if super::win::fox_win(&self.roster) {
            Some(GameOutcome::FoxWin)
        } else if super::win::hound_win(&self.roster, self.dim) {
            Some(GameOutcome::HoundWin)
        } else {
            None
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial(8).unwrap();
        assert_eq!(state.dim(), 8);
        assert_eq!(state.turn(), Side::Fox);
        assert!(!state.is_terminal());
        assert_eq!(state.roster().len(), 5);
    }

    #[test]
    fn test_initial_rejects_bad_dim() {
        assert!(GameState::initial(3).is_err());
        assert!(GameState::initial(27).is_err());
    }

    #[test]
    fn test_apply_move_changes_one_piece_and_flips_turn() {
        let mut state = GameState::initial(8).unwrap();
        let before: Vec<Coord> = state.roster().positions().collect();

        state
            .apply_move(Coord::new(4, 8), Coord::new(3, 7))
            .unwrap();

        assert_eq!(state.turn(), Side::Hound);
        let after: Vec<Coord> = state.roster().positions().collect();
        let changed = before.iter().zip(&after).filter(|(b, a)| b != a).count();
        assert_eq!(changed, 1);
        assert_eq!(state.roster().fox(), Coord::new(3, 7));

        // Invariants still hold: in bounds, no stacking.
        let mut seen = HashSet::new();
        for pos in state.roster().positions() {
            assert!(pos.in_bounds(8));
            assert!(seen.insert(pos));
        }
    }

    #[test]
    fn test_apply_move_vacant_origin() {
        let mut state = GameState::initial(8).unwrap();
        let before = state.clone();
        assert_eq!(
            state.apply_move(Coord::new(0, 5), Coord::new(1, 4)),
            Err(VacantOrigin)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_every_legal_opening_move_preserves_invariants() {
        use crate::game::is_legal;

        for dim in [4usize, 8, 11, 26] {
            let start = GameState::initial(dim).unwrap();
            for side in [Side::Fox, Side::Hound] {
                for origin in start.roster().positions() {
                    for col in 0..dim {
                        for row in 1..=dim {
                            let dest = Coord::new(col, row);
                            if !is_legal(dim, start.roster(), side, origin, dest) {
                                continue;
                            }

                            let mut state = start.clone();
                            state.apply_move(origin, dest).unwrap();

                            let before: Vec<Coord> = start.roster().positions().collect();
                            let after: Vec<Coord> = state.roster().positions().collect();
                            let changed =
                                before.iter().zip(&after).filter(|(b, a)| b != a).count();
                            assert_eq!(changed, 1, "dim {dim}, {origin} -> {dest}");

                            let mut seen = HashSet::new();
                            for pos in state.roster().positions() {
                                assert!(pos.in_bounds(dim), "dim {dim}, {pos}");
                                assert!(seen.insert(pos), "dim {dim}, {pos}");
                            }
                            assert_eq!(state.roster().hounds().len(), dim / 2);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_outcome_after_breakthrough() {
        let mut state = GameState::initial(8).unwrap();
        // Midgame: the B1 hound has advanced to A2, the fox sits on C2 with
        // B1 open in front of it.
        let hounds = vec![
            Coord::new(0, 2),
            Coord::new(3, 1),
            Coord::new(5, 1),
            Coord::new(7, 1),
        ];
        state.restore(Roster::new(hounds, Coord::new(2, 2)), Side::Fox);
        assert!(state.outcome().is_none());

        state.apply_move(Coord::new(2, 2), Coord::new(1, 1)).unwrap();
        assert_eq!(state.outcome(), Some(GameOutcome::FoxWin));
        assert!(state.is_terminal());
    }
}
