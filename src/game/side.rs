#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Fox,
    Hound,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::Fox => Side::Hound,
            Side::Hound => Side::Fox,
        }
    }

    /// Single-character tag used in save records
    pub fn symbol(self) -> char {
        match self {
            Side::Fox => 'F',
            Side::Hound => 'H',
        }
    }

    /// Parse the save-record tag
    pub fn from_symbol(c: char) -> Option<Side> {
        match c {
            'F' => Some(Side::Fox),
            'H' => Some(Side::Hound),
            _ => None,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::Fox => "Fox",
            Side::Hound => "Hounds",
        }
    }
}
