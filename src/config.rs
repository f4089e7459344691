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

/// Game configuration: board size and side to move.
///
/// The size is always normalized into
/// [`MIN_SIZE`](Config::MIN_SIZE)`..=`[`MAX_SIZE`](Config::MAX_SIZE).
/// Invalid input is never an error.
///
/// # Examples
///
/// ```
/// use draughts::Config;
///
/// let mut config = Config::default();
/// config.set_size(3.0);
/// assert_eq!(config.size(), 4);
///
/// config.set_size(f64::NAN);
/// assert_eq!(config.size(), 8);
///
/// config.set_size(11.6);
/// assert_eq!(config.size(), 12);
/// assert_eq!(config.piece_rows(), 4);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    size: u8,
    turn: Color,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            size: Config::DEFAULT_SIZE,
            turn: Color::White,
        }
    }
}

impl Config {
    /// Side length used for non-numeric input.
    pub const DEFAULT_SIZE: u8 = 8;
    pub const MIN_SIZE: u8 = 4;
    pub const MAX_SIZE: u8 = 16;

    /// Creates a configuration with the given (raw) board size and white to
    /// move.
    pub fn with_size(size: f64) -> Config {
        let mut config = Config::default();
        config.set_size(size);
        config
    }

    #[inline]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Sets the board size.
    ///
    /// `NaN` resets the size to [`DEFAULT_SIZE`](Config::DEFAULT_SIZE).
    /// Any other value is rounded to the nearest integer and clamped into
    /// the supported range.
    pub fn set_size(&mut self, size: f64) {
        self.size = if size.is_nan() {
            Config::DEFAULT_SIZE
        } else {
            size.round()
                .clamp(f64::from(Config::MIN_SIZE), f64::from(Config::MAX_SIZE)) as u8
        };
    }

    /// Sets the board size from raw text input, such as the contents of a
    /// form field.
    ///
    /// Surrounding ASCII whitespace is ignored. Integers and decimal numbers
    /// go through [`set_size()`](Config::set_size). Anything else is treated
    /// like `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use draughts::Config;
    ///
    /// let mut config = Config::default();
    /// config.set_size_ascii(b" 10 ");
    /// assert_eq!(config.size(), 10);
    ///
    /// config.set_size_ascii(b"ten");
    /// assert_eq!(config.size(), 8);
    ///
    /// config.set_size_ascii(b"6.5");
    /// assert_eq!(config.size(), 7);
    ///
    /// config.set_size_ascii(b"99999999999999999999999");
    /// assert_eq!(config.size(), 16);
    /// ```
    pub fn set_size_ascii(&mut self, size: &[u8]) {
        let size = size.trim_ascii();
        let size = match btoi::btoi_saturating::<i64>(size) {
            Ok(size) => size as f64,
            Err(_) => std::str::from_utf8(size)
                .ok()
                .and_then(|size| size.parse::<f64>().ok())
                .unwrap_or(f64::NAN),
        };
        self.set_size(size);
    }

    /// Number of rows on each side of the board that are filled with pieces
    /// at the start of a game.
    pub const fn piece_rows(&self) -> u8 {
        if self.size < 8 {
            2
        } else if self.size < 12 {
            3
        } else {
            4
        }
    }

    #[inline]
    pub const fn turn(&self) -> Color {
        self.turn
    }

    /// Makes white the side to move.
    pub fn initialize(&mut self) {
        self.turn = Color::White;
    }

    pub fn switch_turn(&mut self) {
        self.turn = !self.turn;
    }

    pub(crate) fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    pub(crate) fn set_exact_size(&mut self, size: u8) {
        debug_assert!((Config::MIN_SIZE..=Config::MAX_SIZE).contains(&size));
        self.size = size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_size_clamps() {
        let mut config = Config::default();
        for (input, expected) in [
            (3.0, 4),
            (-20.0, 4),
            (4.0, 4),
            (4.49, 4),
            (4.5, 5),
            (16.0, 16),
            (17.0, 16),
            (f64::INFINITY, 16),
            (f64::NEG_INFINITY, 4),
            (f64::NAN, 8),
        ] {
            config.set_size(input);
            assert_eq!(config.size(), expected, "input {input}");
        }
    }

    #[test]
    fn test_piece_rows() {
        for (size, rows) in [(4, 2), (7, 2), (8, 3), (11, 3), (12, 4), (16, 4)] {
            assert_eq!(Config::with_size(f64::from(size)).piece_rows(), rows);
        }
    }

    #[test]
    fn test_switch_turn() {
        let mut config = Config::default();
        assert_eq!(config.turn(), Color::White);
        config.switch_turn();
        assert_eq!(config.turn(), Color::Black);
        config.switch_turn();
        assert_eq!(config.turn(), Color::White);
        config.switch_turn();
        config.initialize();
        assert_eq!(config.turn(), Color::White);
    }

    #[test]
    fn test_set_size_ascii() {
        let mut config = Config::default();
        config.set_size_ascii(b"12");
        assert_eq!(config.size(), 12);
        config.set_size_ascii(b"-3");
        assert_eq!(config.size(), 4);
        config.set_size_ascii(b"");
        assert_eq!(config.size(), 8);
        config.set_size_ascii(b"6.5");
        assert_eq!(config.size(), 7);
    }

    #[test]
    fn test_set_size_ascii_numeric_forms() {
        let mut config = Config::default();
        for (input, expected) in [
            ("99999999999999999999999", 16),
            ("-99999999999999999999999", 4),
            ("1e1", 10),
            (" 12.4\n", 12),
            ("4.49", 4),
            ("+9", 9),
            ("inf", 16),
            ("NaN", 8),
            ("12 4", 8),
            ("0x10", 8),
        ] {
            config.set_size(11.0);
            config.set_size_ascii(input.as_bytes());
            assert_eq!(config.size(), expected, "input {input:?}");
        }
    }
}
