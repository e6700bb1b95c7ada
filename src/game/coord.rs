use crate::error::CoordError;
use std::fmt;

/// A board coordinate: 0-based column (file letter `A`..) and 1-based row.
///
/// The canonical text form is an uppercase letter followed by the decimal
/// row number, e.g. `E8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Coord { col, row }
    }

    /// Parse a coordinate token against a board dimension.
    ///
    /// The token must be exactly one ASCII uppercase letter followed by one
    /// or more decimal digits; anything else is a [`CoordError::Format`].
    /// Well-formed tokens outside `[0,dim-1] x [1,dim]` are a
    /// [`CoordError::Range`].
    pub fn parse(token: &str, dim: usize) -> Result<Coord, CoordError> {
        let mut chars = token.chars();
        let letter = match chars.next() {
            Some(c) if c.is_ascii_uppercase() => c,
            _ => return Err(CoordError::Format(token.to_string())),
        };
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoordError::Format(token.to_string()));
        }

        let col = (letter as u8 - b'A') as usize;
        // Digits are well-formed at this point, so overflow means the row is
        // merely too large for any board.
        let row: usize = digits.parse().map_err(|_| CoordError::Range {
            token: token.to_string(),
            dim,
        })?;

        if col >= dim || row < 1 || row > dim {
            return Err(CoordError::Range {
                token: token.to_string(),
                dim,
            });
        }

        Ok(Coord { col, row })
    }

    /// Whether this coordinate lies on a `dim`-sized board.
    pub fn in_bounds(&self, dim: usize) -> bool {
        self.col < dim && self.row >= 1 && self.row <= dim
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Coord::parse("A1", 8), Ok(Coord::new(0, 1)));
        assert_eq!(Coord::parse("E8", 8), Ok(Coord::new(4, 8)));
        assert_eq!(Coord::parse("H1", 8), Ok(Coord::new(7, 1)));
        assert_eq!(Coord::parse("Z26", 26), Ok(Coord::new(25, 26)));
    }

    #[test]
    fn test_parse_format_errors() {
        for token in ["", "8", "E", "e8", "E 8", "E8x", "EE8", "8E", "-E8"] {
            assert!(
                matches!(Coord::parse(token, 8), Err(CoordError::Format(_))),
                "expected format error for {token:?}"
            );
        }
    }

    #[test]
    fn test_parse_range_errors() {
        for token in ["I1", "A0", "A9", "E99"] {
            assert!(
                matches!(Coord::parse(token, 8), Err(CoordError::Range { .. })),
                "expected range error for {token:?}"
            );
        }
        // Overflowing row is still well-formed digits, so it is a range error.
        assert!(matches!(
            Coord::parse("A99999999999999999999", 8),
            Err(CoordError::Range { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(4, 8).to_string(), "E8");
        assert_eq!(Coord::new(0, 1).to_string(), "A1");
        assert_eq!(Coord::new(25, 26).to_string(), "Z26");
    }

    #[test]
    fn test_parse_format_roundtrip() {
        for dim in [4usize, 8, 13, 26] {
            for col in 0..dim {
                for row in 1..=dim {
                    let c = Coord::new(col, row);
                    assert_eq!(Coord::parse(&c.to_string(), dim), Ok(c));
                }
            }
        }
    }
}
