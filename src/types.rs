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

use crate::color::Color;

/// A piece with [`Color`] and a promotion flag.
///
/// Men move and capture forward only. Kings may also move and capture
/// backwards, but still only one step (or one jump) at a time.
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub king: bool,
}

impl Piece {
    /// Gets the diagram letter: `w`/`b` for men, `W`/`B` for kings.
    ///
    /// # Examples
    ///
    /// ```
    /// use draughts::Color;
    ///
    /// assert_eq!(Color::White.man().char(), 'w');
    /// assert_eq!(Color::Black.king().char(), 'B');
    /// ```
    pub const fn char(self) -> char {
        match (self.color, self.king) {
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }

    pub const fn from_char(ch: char) -> Option<Piece> {
        match ch {
            'w' => Some(Color::White.man()),
            'W' => Some(Color::White.king()),
            'b' => Some(Color::Black.man()),
            'B' => Some(Color::Black.king()),
            _ => None,
        }
    }

    /// Promotes the piece in place. Promoting a king has no effect.
    #[inline]
    pub fn promote(&mut self) {
        self.king = true;
    }

    /// Row deltas this piece may move or capture in.
    #[inline]
    pub fn row_directions(self) -> &'static [i32] {
        if self.king {
            &[-1, 1]
        } else {
            self.color.fold_wb(&[-1], &[1])
        }
    }
}
