use super::{Coord, Roster};

/// The four diagonal direction offsets as (column, row) deltas.
const DIAGONALS: [(i64, i64); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Check if the fox has broken through to the hounds' home row.
pub fn fox_win(roster: &Roster) -> bool {
    roster.fox().row == 1
}

/// Check if the hounds have encircled the fox.
///
/// A diagonal neighbor blocks the fox if it lies off the board (a board
/// edge counts as a wall) or a hound stands on it. The same off-board test
/// covers both axes in every direction. The hounds win when all four
/// diagonals block.
pub fn hound_win(roster: &Roster, dim: usize) -> bool {
    let fox = roster.fox();
    DIAGONALS.iter().all(|&(dc, dr)| {
        let col = fox.col as i64 + dc;
        let row = fox.row as i64 + dr;
        if col < 0 || col >= dim as i64 || row < 1 || row > dim as i64 {
            return true;
        }
        roster.hound_at(Coord::new(col as usize, row as usize))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::placement::initial_roster;

    #[test]
    fn test_fox_win_on_row_one() {
        for dim in [4usize, 8, 26] {
            for col in 0..dim {
                let roster = Roster::new(vec![], Coord::new(col, 1));
                assert!(fox_win(&roster), "dim {dim}, col {col}");
            }
        }
    }

    #[test]
    fn test_no_fox_win_elsewhere() {
        for row in 2..=8 {
            let roster = Roster::new(vec![], Coord::new(3, row));
            assert!(!fox_win(&roster), "row {row}");
        }
    }

    #[test]
    fn test_initial_position_is_not_terminal() {
        for dim in [4usize, 8, 26] {
            let roster = initial_roster(dim).unwrap();
            assert!(!fox_win(&roster), "dim {dim}");
            assert!(!hound_win(&roster, dim), "dim {dim}");
        }
    }

    #[test]
    fn test_full_encirclement_mid_board() {
        let fox = Coord::new(3, 4);
        let hounds = vec![
            Coord::new(2, 3),
            Coord::new(4, 3),
            Coord::new(2, 5),
            Coord::new(4, 5),
        ];
        let roster = Roster::new(hounds, fox);
        assert!(hound_win(&roster, 8));
    }

    #[test]
    fn test_one_open_diagonal_is_not_a_win() {
        let fox = Coord::new(3, 4);
        // Three of four diagonals covered.
        let hounds = vec![Coord::new(2, 3), Coord::new(4, 3), Coord::new(2, 5)];
        let roster = Roster::new(hounds, fox);
        assert!(!hound_win(&roster, 8));
    }

    #[test]
    fn test_corner_encirclement_all_four_corners() {
        let dim = 8;
        let corners = [
            Coord::new(0, 1),
            Coord::new(dim - 1, 1),
            Coord::new(0, dim),
            Coord::new(dim - 1, dim),
        ];
        for fox in corners {
            // The two walls block two diagonals; only the reachable ones
            // need hounds.
            let hounds: Vec<Coord> = DIAGONALS
                .iter()
                .filter_map(|&(dc, dr)| {
                    let col = fox.col as i64 + dc;
                    let row = fox.row as i64 + dr;
                    (col >= 0 && col < dim as i64 && row >= 1 && row <= dim as i64)
                        .then(|| Coord::new(col as usize, row as usize))
                })
                .collect();
            assert_eq!(hounds.len(), 1, "corner {fox}");

            let roster = Roster::new(hounds, fox);
            assert!(hound_win(&roster, dim), "corner {fox}");
        }
    }

    #[test]
    fn test_edge_fox_needs_both_inboard_diagonals() {
        let dim = 8;
        // Fox on the left edge, mid-board: two diagonals are walls.
        let fox = Coord::new(0, 4);
        let both = vec![Coord::new(1, 3), Coord::new(1, 5)];
        assert!(hound_win(&Roster::new(both, fox), dim));

        let only_one = vec![Coord::new(1, 3)];
        assert!(!hound_win(&Roster::new(only_one, fox), dim));
    }

    #[test]
    fn test_fox_itself_never_blocks() {
        // A lone fox mid-board is mobile.
        let roster = Roster::new(vec![], Coord::new(3, 4));
        assert!(!hound_win(&roster, 8));
    }
}
