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

//! Parse and write position diagrams.
//!
//! A diagram lists the rows of the board from top to bottom, separated by
//! `/`. Within a row, `w` and `b` are men, `W` and `B` are kings, and a
//! number stands for that many consecutive empty squares. The side to move
//! follows after a space.
//!
//! # Examples
//!
//! ```
//! use draughts::{Diagram, Game};
//!
//! let game = Game::start(4.0);
//! assert_eq!(game.diagram().to_string(), "1b1b/b1b1/1w1w/w1w1 w");
//!
//! let diagram: Diagram = "8/8/3b4/8/1W6/8/8/8 b".parse()?;
//! let game = Game::from_diagram(&diagram)?;
//! assert_eq!(game.legal_moves().len(), 2);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

use std::{
    error::Error,
    fmt::{self, Write as _},
    iter,
    str::FromStr,
};

use crate::{board::Board, color::Color, config::Config, game::Game, square::Square, types::Piece};

/// Errors that can occur when parsing a diagram.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseDiagramError {
    /// The board part is not a square grid of pieces and empty squares.
    InvalidBoard,
    /// The side to move is neither `w` nor `b`.
    InvalidTurn,
    /// There is unexpected input after the side to move.
    TrailingGarbage,
}

impl fmt::Display for ParseDiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseDiagramError::InvalidBoard => "invalid diagram board",
            ParseDiagramError::InvalidTurn => "invalid diagram turn",
            ParseDiagramError::TrailingGarbage => "trailing garbage in diagram",
        })
    }
}

impl Error for ParseDiagramError {}

/// A parsed diagram.
///
/// Any square grid of up to 255 rows can be parsed. Use
/// [`Game::from_diagram()`] to check that it is playable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagram {
    pub board: Board,
    pub turn: Color,
}

impl Default for Diagram {
    /// The starting position on a board of
    /// [`Config::DEFAULT_SIZE`].
    fn default() -> Diagram {
        Game::start(f64::from(Config::DEFAULT_SIZE)).diagram()
    }
}

impl Diagram {
    /// Parses a diagram. The side to move defaults to white if it is
    /// omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDiagramError`] if the input is not syntactically
    /// valid.
    pub fn from_ascii(diagram: &[u8]) -> Result<Diagram, ParseDiagramError> {
        let mut parts = diagram.split(|&ch| ch == b' ');

        let board = parts
            .next()
            .and_then(parse_board)
            .ok_or(ParseDiagramError::InvalidBoard)?;

        let turn = match parts.next() {
            Some([b'w']) | None => Color::White,
            Some([b'b']) => Color::Black,
            Some(_) => return Err(ParseDiagramError::InvalidTurn),
        };

        if parts.next().is_some() {
            return Err(ParseDiagramError::TrailingGarbage);
        }

        Ok(Diagram { board, turn })
    }
}

fn parse_board(s: &[u8]) -> Option<Board> {
    let rows: Vec<&[u8]> = s.split(|&ch| ch == b'/').collect();
    let size = u8::try_from(rows.len()).ok()?;
    let width = usize::from(size);

    let mut cells = Vec::with_capacity(width * width);
    for row in rows {
        let start = cells.len();
        let mut rest = row;
        while let Some((&ch, tail)) = rest.split_first() {
            if ch.is_ascii_digit() {
                let digits = rest.iter().take_while(|ch| ch.is_ascii_digit()).count();
                let empty: usize = btoi::btou(&rest[..digits]).ok()?;
                if empty == 0 || empty > width - (cells.len() - start) {
                    return None;
                }
                cells.extend(iter::repeat_n(None, empty));
                rest = &rest[digits..];
            } else {
                if cells.len() - start >= width {
                    return None;
                }
                cells.push(Some(Piece::from_char(char::from(ch))?));
                rest = tail;
            }
        }
        if cells.len() - start != width {
            return None;
        }
    }

    Some(Board::from_cells(size, cells))
}

impl FromStr for Diagram {
    type Err = ParseDiagramError;

    fn from_str(diagram: &str) -> Result<Diagram, ParseDiagramError> {
        Diagram::from_ascii(diagram.as_bytes())
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = i32::from(self.board.size());
        for row in 0..size {
            if row > 0 {
                f.write_char('/')?;
            }
            let mut empty = 0;
            for col in 0..size {
                match self.board.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        f.write_char(piece.char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
        }
        write!(f, " {}", self.turn.char())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Diagram {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Diagram {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DiagramVisitor;

        impl serde::de::Visitor<'_> for DiagramVisitor {
            type Value = Diagram;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("position diagram")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(DiagramVisitor)
    }
}
