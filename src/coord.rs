//! Board coordinates and their text form.
//!
//! A coordinate is a 1-based `(column, row)` pair. The text form used
//! at the boundary is one uppercase column letter followed by a decimal
//! row number: `"A1"` is the first column, first row. Letters run
//! `A..=Z` with none skipped, which is what caps boards at 26x26.

use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// A 1-based (column, row) pair naming one intersection.
///
/// Ordering is derived, so sorted collections of coordinates come out
/// in column-then-row order regardless of how they were produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub col: usize,
    pub row: usize,
}

impl Coord {
    pub fn new(col: usize, row: usize) -> Self {
        Coord { col, row }
    }

    /// Parse boundary text like `"D4"` into a coordinate.
    ///
    /// Only rejects input that can never name an intersection (wrong
    /// shape, lowercase letter, row zero). Whether the coordinate fits
    /// a particular board is checked by the board itself.
    pub fn parse(s: &str) -> Result<Coord, GameError> {
        let invalid = || GameError::InvalidCoordinate(s.to_string());

        let (&letter, digits) = s.as_bytes().split_first().ok_or_else(invalid)?;
        if !letter.is_ascii_uppercase()
            || digits.is_empty()
            || !digits.iter().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let row: usize = s[1..].parse().map_err(|_| invalid())?;
        if row == 0 {
            return Err(invalid());
        }

        Ok(Coord::new((letter - b'A') as usize + 1, row))
    }
}

impl FromStr for Coord {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coord::parse(s)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Columns outside A..=Z have no letter form.
        if (1..=26).contains(&self.col) {
            let letter = (b'A' + (self.col - 1) as u8) as char;
            write!(f, "{letter}{}", self.row)
        } else {
            write!(f, "({},{})", self.col, self.row)
        }
    }
}
