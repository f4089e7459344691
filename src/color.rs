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

use std::{error::Error, fmt, ops, str::FromStr};

use crate::types::Piece;

/// `White` or `Black`.
///
/// White moves first and starts on the bottom rows, advancing towards
/// row 0. Black starts on the top rows and advances towards the last row.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    #[inline]
    pub fn fold_wb<T>(self, white: T, black: T) -> T {
        match self {
            Color::White => white,
            Color::Black => black,
        }
    }

    #[must_use]
    #[inline]
    pub const fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step: `-1` for white, `+1` for black.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row on which men of this color are promoted, on a board with
    /// the given side length.
    ///
    /// # Examples
    ///
    /// ```
    /// use draughts::Color;
    ///
    /// assert_eq!(Color::White.promotion_row(8), 0);
    /// assert_eq!(Color::Black.promotion_row(8), 7);
    /// ```
    #[inline]
    pub const fn promotion_row(self, size: u8) -> i32 {
        match self {
            Color::White => 0,
            Color::Black => size as i32 - 1,
        }
    }

    pub const fn char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// An unpromoted piece of this color.
    #[inline]
    pub const fn man(self) -> Piece {
        Piece {
            color: self,
            king: false,
        }
    }

    /// A king of this color.
    #[inline]
    pub const fn king(self) -> Piece {
        Piece {
            color: self,
            king: true,
        }
    }

    /// `White` and `Black`, in this order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];
}

impl ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.other()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold_wb("white", "black"))
    }
}

/// Error when parsing an invalid color name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid color")
    }
}

impl Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Color, ParseColorError> {
        Ok(match s {
            "white" => Color::White,
            "black" => Color::Black,
            _ => return Err(ParseColorError),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.fold_wb("white", "black"))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ColorVisitor;

        impl serde::de::Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("white or black")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}

/// Container with values for each [`Color`].
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug, Hash)]
pub struct ByColor<T> {
    pub white: T,
    pub black: T,
}

impl<T> ByColor<T> {
    #[inline]
    pub fn new_with<F>(mut init: F) -> ByColor<T>
    where
        F: FnMut(Color) -> T,
    {
        ByColor {
            white: init(Color::White),
            black: init(Color::Black),
        }
    }

    #[inline]
    pub const fn get(&self, color: Color) -> &T {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Finds the first color (white before black) whose value satisfies
    /// the predicate.
    #[inline]
    pub fn find<F>(&self, mut predicate: F) -> Option<Color>
    where
        F: FnMut(&T) -> bool,
    {
        if predicate(&self.white) {
            Some(Color::White)
        } else if predicate(&self.black) {
            Some(Color::Black)
        } else {
            None
        }
    }
}

impl<T: ops::Add<Output = T> + Copy> ByColor<T> {
    /// Sum of the values for both colors.
    pub fn sum(&self) -> T {
        self.white + self.black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn test_forward_points_at_promotion_row() {
        for color in Color::ALL {
            let start = color.other().promotion_row(8);
            let target = color.promotion_row(8);
            assert_eq!((target - start).signum(), color.forward());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("white".parse::<Color>(), Ok(Color::White));
        assert_eq!("black".parse::<Color>(), Ok(Color::Black));
        assert_eq!("first".parse::<Color>(), Err(ParseColorError));
        assert_eq!(Color::White.to_string(), "white");
    }

    #[test]
    fn test_by_color_find() {
        let counts = ByColor { white: 0, black: 3 };
        assert_eq!(counts.find(|&n| n == 0), Some(Color::White));
        assert_eq!(counts.find(|&n| n == 3), Some(Color::Black));
        assert_eq!(counts.find(|&n| n == 1), None);
        assert_eq!(counts.sum(), 3);
    }
}
