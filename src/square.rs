// This file is part of the draughts library.
// Copyright (C) 2024 The draughts contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{error::Error, fmt, str::FromStr};

/// Error when parsing an invalid square.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square")
    }
}

impl Error for ParseSquareError {}

/// A board-relative cell, `row` counted from the top and `col` from the
/// left.
///
/// Coordinates are signed and unchecked, so that a square may lie outside
/// of any board. Use [`Board::contains()`](crate::Board::contains) to
/// check.
///
/// # Examples
///
/// ```
/// use draughts::Square;
///
/// let sq = Square::new(5, 0);
/// assert!(sq.is_dark());
/// assert_eq!(sq.offset(-1, 1), Square::new(4, 1));
/// assert_eq!(sq.to_string(), "5,0");
/// ```
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Square {
    row: i32,
    col: i32,
}

impl Square {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Square {
        Square { row, col }
    }

    #[inline]
    pub const fn row(self) -> i32 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Tests if this is a dark (playable) square, i.e. `row + col` is odd.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row ^ self.col) & 1 == 1
    }

    #[must_use]
    #[inline]
    pub const fn offset(self, rows: i32, cols: i32) -> Square {
        Square {
            row: self.row.wrapping_add(rows),
            col: self.col.wrapping_add(cols),
        }
    }

    /// The square halfway between `self` and `other`, if there is one.
    pub const fn midpoint(self, other: Square) -> Option<Square> {
        let rows = other.row.wrapping_sub(self.row);
        let cols = other.col.wrapping_sub(self.col);
        if rows % 2 != 0 || cols % 2 != 0 {
            None
        } else {
            Some(self.offset(rows / 2, cols / 2))
        }
    }

    /// Parses a square from `row,col`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSquareError`] if the input is not two decimal
    /// integers separated by a comma.
    pub fn from_ascii(s: &[u8]) -> Result<Square, ParseSquareError> {
        let comma = s
            .iter()
            .position(|&ch| ch == b',')
            .ok_or(ParseSquareError)?;
        let row = btoi::btoi(&s[..comma]).map_err(|_| ParseSquareError)?;
        let col = btoi::btoi(&s[comma + 1..]).map_err(|_| ParseSquareError)?;
        Ok(Square::new(row, col))
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        Square::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SquareVisitor;

        impl serde::de::Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("square as row,col")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_dark() {
        assert!(Square::new(0, 1).is_dark());
        assert!(Square::new(5, 0).is_dark());
        assert!(!Square::new(0, 0).is_dark());
        assert!(!Square::new(4, 6).is_dark());
        assert!(Square::new(-1, 0).is_dark());
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(
            Square::new(2, 1).midpoint(Square::new(0, 3)),
            Some(Square::new(1, 2))
        );
        assert_eq!(Square::new(5, 0).midpoint(Square::new(4, 1)), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("5,0".parse(), Ok(Square::new(5, 0)));
        assert_eq!("-1,16".parse(), Ok(Square::new(-1, 16)));
        assert_eq!("5".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("5,".parse::<Square>(), Err(ParseSquareError));
        assert_eq!("a,1".parse::<Square>(), Err(ParseSquareError));
    }
}
