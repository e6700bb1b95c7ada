use super::Coord;

/// All piece positions on the board: the hounds in their original order,
/// plus the single fox. The fox is always the last entry when the roster is
/// viewed as a flat sequence (iteration, save records).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    hounds: Vec<Coord>,
    fox: Coord,
}

impl Roster {
    /// Build a roster from explicit positions. Pieces never stack, so two
    /// entries on the same square are a construction bug.
    pub fn new(hounds: Vec<Coord>, fox: Coord) -> Self {
        debug_assert!(
            !hounds.contains(&fox),
            "fox stacked on a hound at {fox}"
        );
        debug_assert!(
            hounds
                .iter()
                .enumerate()
                .all(|(i, h)| !hounds[..i].contains(h)),
            "two hounds stacked on one square"
        );
        Roster { hounds, fox }
    }

    pub fn hounds(&self) -> &[Coord] {
        &self.hounds
    }

    pub fn fox(&self) -> Coord {
        self.fox
    }

    /// Total number of pieces (hounds + fox).
    pub fn len(&self) -> usize {
        self.hounds.len() + 1
    }

    /// All positions, hounds first, fox last.
    pub fn positions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.hounds.iter().copied().chain(std::iter::once(self.fox))
    }

    /// Check if any piece occupies the given coordinate
    pub fn occupied(&self, c: Coord) -> bool {
        self.fox == c || self.hound_at(c)
    }

    /// Check if a hound occupies the given coordinate
    pub fn hound_at(&self, c: Coord) -> bool {
        self.hounds.contains(&c)
    }

    /// Move the piece standing on `origin` to `dest`. Returns `false` and
    /// leaves the roster unchanged if no piece stands on `origin`.
    pub(super) fn relocate(&mut self, origin: Coord, dest: Coord) -> bool {
        if self.fox == origin {
            self.fox = dest;
            return true;
        }
        if let Some(entry) = self.hounds.iter_mut().find(|h| **h == origin) {
            *entry = dest;
            return true;
        }
        false
    }
}
