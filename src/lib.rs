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

//! A library for checkers rules: board setup, move validation, captures,
//! promotion and game over detection on square boards from 4×4 to 16×16.
//!
//! # Examples
//!
//! Generate legal moves in the starting position:
//!
//! ```
//! use draughts::Game;
//!
//! let game = Game::start(8.0);
//! let legals = game.legal_moves();
//! assert_eq!(legals.len(), 7);
//! ```
//!
//! Play moves:
//!
//! ```
//! use draughts::{Game, Move, Square};
//!
//! let mut game = Game::start(8.0);
//!
//! let played = game.play(Move::new(Square::new(5, 0), Square::new(4, 1)))?;
//! assert_eq!(played.captured, None);
//! # Ok::<_, draughts::PlayError>(())
//! ```
//!
//! Detect game end conditions:
//!
//! ```
//! use draughts::{Color, Game};
//!
//! let game = Game::start(8.0);
//! assert!(!game.is_game_over());
//! assert_eq!(game.winner(), None); // no winner yet
//!
//! let game = Game::start(4.0);
//! assert_eq!(game.winner(), Some(Color::Black)); // white is blocked
//! ```
//!
//! Also supports a [diagram](diagram) format for positions.
//!
//! # Rules
//!
//! Pieces occupy dark squares only. White starts at the bottom and moves
//! first. Men step one square diagonally forward, kings one square
//! diagonally in any direction. A capture jumps over an adjacent opposing
//! piece onto the empty square behind it, forward only for men. Captures
//! are optional and there are no multi-jump sequences. A man reaching the
//! far row becomes a king. A side without pieces, or without any piece
//! that can move, loses.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for vocabulary types.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//!
//! # Logging
//!
//! Rejected moves are reported at `debug`, played moves and touches at
//! `trace` and finished games at `info` level, using
//! [`tracing`](https://docs.rs/tracing/0.1).

#![doc(html_root_url = "https://docs.rs/draughts/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod color;
mod config;
mod game;
mod m;
mod perft;
mod square;
mod types;

pub mod board;
pub mod diagram;

pub use board::Board;
pub use color::{ByColor, Color, ParseColorError};
pub use config::Config;
pub use diagram::{Diagram, ParseDiagramError};
pub use game::{Game, Outcome, PlayError, Played, Reason, SetupError, SetupErrorKinds, Touch};
pub use m::{Move, MoveList, ParseMoveError};
pub use perft::perft;
pub use square::{ParseSquareError, Square};
pub use types::Piece;

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
