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

use arrayvec::ArrayVec;

use crate::square::Square;

/// Error when parsing an invalid move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseMoveError;

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid move")
    }
}

impl Error for ParseMoveError {}

/// A move from one square to another.
///
/// Whether a move is a single step or a capturing jump follows from the
/// distance between the squares and is only decided in the context of a
/// [`Game`](crate::Game).
///
/// # Display
///
/// `Move` is written as `from-to`, e.g. `5,0-4,1`.
///
/// # Examples
///
/// ```
/// use draughts::{Move, Square};
///
/// let m: Move = "5,0-4,1".parse()?;
/// assert_eq!(m, Move::new(Square::new(5, 0), Square::new(4, 1)));
/// assert_eq!(m.to_string(), "5,0-4,1");
/// # Ok::<_, draughts::ParseMoveError>(())
/// ```
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Row delta of the move.
    #[inline]
    pub const fn rows(self) -> i32 {
        self.to.row().wrapping_sub(self.from.row())
    }

    /// Column delta of the move.
    #[inline]
    pub const fn cols(self) -> i32 {
        self.to.col().wrapping_sub(self.from.col())
    }

    /// Parses a move from `row,col-row,col`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseMoveError`] if either square is invalid or the
    /// separating `-` is missing.
    pub fn from_ascii(s: &[u8]) -> Result<Move, ParseMoveError> {
        let comma = s
            .iter()
            .position(|&ch| ch == b',')
            .ok_or(ParseMoveError)?;
        // The byte after the comma may be the sign of the column.
        let split = s
            .iter()
            .skip(comma + 2)
            .position(|&ch| ch == b'-')
            .map(|i| i + comma + 2)
            .ok_or(ParseMoveError)?;
        let from = Square::from_ascii(&s[..split]).map_err(|_| ParseMoveError)?;
        let to = Square::from_ascii(&s[split + 1..]).map_err(|_| ParseMoveError)?;
        Ok(Move { from, to })
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        Move::from_ascii(s.as_bytes())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MoveVisitor;

        impl serde::de::Visitor<'_> for MoveVisitor {
            type Value = Move;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("move as row,col-row,col")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(MoveVisitor)
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// There is enough space for the moves of any position on the largest
/// supported board: every dark square occupied by a king with a move in
/// each of the four diagonal directions.
///
/// # Example
///
/// ```
/// use draughts::Game;
///
/// let game = Game::start(8.0);
/// assert_eq!(game.legal_moves().len(), 7);
/// ```
pub type MoveList = ArrayVec<Move, 512>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_coordinates() {
        let m: Move = "-1,0--2,1".parse().expect("valid move");
        assert_eq!(m.from, Square::new(-1, 0));
        assert_eq!(m.to, Square::new(-2, 1));
        assert_eq!(m.rows(), -1);
        assert_eq!(m.cols(), 1);

        let m: Move = "5,-1-4,0".parse().expect("valid move");
        assert_eq!(m.from, Square::new(5, -1));
        assert_eq!(m.to, Square::new(4, 0));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!("5,0".parse::<Move>(), Err(ParseMoveError));
        assert_eq!("5,0-".parse::<Move>(), Err(ParseMoveError));
        assert_eq!("-".parse::<Move>(), Err(ParseMoveError));
        assert_eq!("".parse::<Move>(), Err(ParseMoveError));
    }

    #[test]
    fn test_display_roundtrip() {
        let m = Move::new(Square::new(2, 1), Square::new(0, 3));
        assert_eq!(m.to_string().parse(), Ok(m));
    }
}
