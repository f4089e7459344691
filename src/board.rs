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

//! Piece positions on a board.

use std::fmt::{self, Write as _};

use crate::{
    color::{ByColor, Color},
    config::Config,
    square::Square,
    types::Piece,
};

/// Piece positions on a square board.
///
/// Cells are stored row-major in a single allocation. Reads outside of the
/// board return `None` and writes outside of the board are ignored.
///
/// # Examples
///
/// ```
/// use draughts::{Board, Color, Config, Square};
///
/// let mut board = Board::new(&Config::default());
/// board.generate();
///
/// assert_eq!(board.piece_at(Square::new(0, 1)), Some(Color::Black.man()));
/// assert_eq!(board.piece_at(Square::new(7, 0)), Some(Color::White.man()));
/// assert_eq!(board.piece_at(Square::new(8, 0)), None);
///
/// // . b . b . b . b
/// // b . b . b . b .
/// // . b . b . b . b
/// // . . . . . . . .
/// // . . . . . . . .
/// // w . w . w . w .
/// // . w . w . w . w
/// // w . w . w . w .
/// ```
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    size: u8,
    piece_rows: u8,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Creates an empty board with the size and piece rows of the given
    /// configuration.
    pub fn new(config: &Config) -> Board {
        let size = config.size();
        Board {
            size,
            piece_rows: config.piece_rows(),
            cells: vec![None; usize::from(size) * usize::from(size)],
        }
    }

    #[inline]
    pub const fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub const fn piece_rows(&self) -> u8 {
        self.piece_rows
    }

    /// Clears the board and places men on the dark squares of the first
    /// and last [`piece_rows()`](Board::piece_rows) rows: black at the top,
    /// white at the bottom.
    pub fn generate(&mut self) {
        let size = i32::from(self.size);
        let piece_rows = i32::from(self.piece_rows);

        self.clear();
        for row in 0..size {
            for col in 0..size {
                let sq = Square::new(row, col);
                if !sq.is_dark() {
                    continue;
                }
                if row < piece_rows {
                    self.set_piece_at(sq, Some(Color::Black.man()));
                } else if row >= size - piece_rows {
                    self.set_piece_at(sq, Some(Color::White.man()));
                }
            }
        }
    }

    /// Removes all pieces.
    pub fn clear(&mut self) {
        self.cells = vec![None; usize::from(self.size) * usize::from(self.size)];
    }

    /// Tests if the square is on the board.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        let size = i32::from(self.size);
        (0..size).contains(&sq.row()) && (0..size).contains(&sq.col())
    }

    #[inline]
    fn index(&self, sq: Square) -> Option<usize> {
        self.contains(sq)
            .then(|| sq.row() as usize * usize::from(self.size) + sq.col() as usize)
    }

    /// Gets the piece on a square, or `None` if the square is empty or not
    /// on the board.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.index(sq).and_then(|i| self.cells[i])
    }

    /// Puts a piece on a square or clears it. Does nothing if the square is
    /// not on the board.
    #[inline]
    pub fn set_piece_at(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(i) = self.index(sq) {
            self.cells[i] = piece;
        }
    }

    /// Removes and returns the piece on a square.
    #[inline]
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        self.index(sq).and_then(|i| self.cells[i].take())
    }

    /// Tests if a square is empty.
    ///
    /// # Panics
    ///
    /// Unlike [`piece_at()`](Board::piece_at), this does not tolerate
    /// squares outside of the board. Check [`contains()`](Board::contains)
    /// first.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        assert!(self.contains(sq), "square {sq} is not on the board");
        self.piece_at(sq).is_none()
    }

    /// Iterates over all occupied squares, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let size = usize::from(self.size);
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|piece| (Square::new((i / size) as i32, (i % size) as i32), piece))
        })
    }

    /// Counts the pieces of each color.
    pub fn count(&self) -> ByColor<usize> {
        let mut count = ByColor::default();
        for (_, piece) in self.pieces() {
            *count.get_mut(piece.color) += 1;
        }
        count
    }

    pub(crate) fn from_cells(size: u8, cells: Vec<Option<Piece>>) -> Board {
        debug_assert_eq!(cells.len(), usize::from(size) * usize::from(size));
        Board {
            size,
            piece_rows: Config::with_size(f64::from(size)).piece_rows(),
            cells,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = i32::from(self.size);
        for row in 0..size {
            for col in 0..size {
                f.write_char(
                    self.piece_at(Square::new(row, col))
                        .map_or('.', Piece::char),
                )?;
                f.write_char(if col + 1 < size { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated(size: f64) -> Board {
        let mut board = Board::new(&Config::with_size(size));
        board.generate();
        board
    }

    #[test]
    fn test_generate_counts() {
        for size in (4..=16).step_by(2) {
            let board = generated(f64::from(size));
            let rows = usize::from(board.piece_rows());
            let per_side = rows * usize::from(board.size()) / 2;
            assert_eq!(board.count(), ByColor { white: per_side, black: per_side });
        }
        assert_eq!(generated(8.0).count(), ByColor { white: 12, black: 12 });
    }

    #[test]
    fn test_generate_dark_squares_only() {
        for size in 4..=16 {
            let board = generated(f64::from(size));
            assert!(board.pieces().all(|(sq, _)| sq.is_dark()));
        }
    }

    #[test]
    fn test_generate_resets() {
        let mut board = generated(6.0);
        board.set_piece_at(Square::new(2, 1), Some(Color::White.king()));
        board.remove_piece_at(Square::new(0, 1));
        board.generate();
        assert_eq!(board, generated(6.0));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = generated(4.0);
        let before = board.clone();
        for sq in [
            Square::new(-1, 0),
            Square::new(0, -1),
            Square::new(4, 1),
            Square::new(1, 4),
        ] {
            assert_eq!(board.piece_at(sq), None);
            board.set_piece_at(sq, Some(Color::White.man()));
            assert_eq!(board.remove_piece_at(sq), None);
        }
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic]
    fn test_is_empty_out_of_bounds() {
        generated(4.0).is_empty(Square::new(4, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            generated(4.0).to_string(),
            ". b . b\nb . b .\n. w . w\nw . w .\n"
        );
    }
}
