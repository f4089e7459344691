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

use std::{error::Error, fmt};

use bitflags::bitflags;
use tracing::{debug, info, trace};

use crate::{
    board::Board,
    color::{ByColor, Color},
    config::Config,
    diagram::Diagram,
    m::{Move, MoveList},
    square::Square,
};

/// Why a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Reason {
    /// The loser has no pieces left.
    Eliminated,
    /// The loser has pieces, but none of them can move or capture.
    Blocked,
}

/// Outcome of a finished game.
///
/// # Display
///
/// ```
/// use draughts::{Color, Outcome, Reason};
///
/// let outcome = Outcome { winner: Color::White, reason: Reason::Blocked };
/// assert_eq!(outcome.to_string(), "white wins (black blocked)");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub winner: Color,
    pub reason: Reason,
}

impl Outcome {
    #[inline]
    pub const fn loser(self) -> Color {
        self.winner.other()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} wins ({} {})",
            self.winner,
            self.loser(),
            match self.reason {
                Reason::Eliminated => "eliminated",
                Reason::Blocked => "blocked",
            }
        )
    }
}

/// Error when trying to play an illegal move. The game is left unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlayError {
    /// The game is already over.
    GameOver,
    /// There is no piece on the origin square.
    EmptySquare,
    /// The piece on the origin square belongs to the side not to move.
    WrongTurn,
    /// The move is neither a legal step nor a legal capture.
    IllegalMove,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayError::GameOver => "game is over",
            PlayError::EmptySquare => "no piece on origin square",
            PlayError::WrongTurn => "not this side's turn",
            PlayError::IllegalMove => "illegal move",
        })
    }
}

impl Error for PlayError {}

/// Effects of a successfully played move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Played {
    /// Square of the captured piece, if the move was a capture.
    pub captured: Option<Square>,
    /// Whether the moved piece was promoted.
    pub promoted: bool,
}

/// Result of [`Game::touch()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Touch {
    /// Nothing happened.
    Ignored,
    /// A piece of the side to move was selected.
    Selected(Square),
    /// The selected piece was touched again and deselected.
    Deselected,
    /// The selected piece was moved to the touched square.
    Moved(Played),
    /// The selected piece can not move to the touched square. It stays
    /// selected.
    Rejected(PlayError),
}

bitflags! {
    /// Reasons for a [`Diagram`] not describing a playable position.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct SetupErrorKinds: u32 {
        /// The board size is outside of the supported range.
        const SIZE = 1 << 0;
        /// There are pieces on light squares.
        const LIGHT_SQUARE = 1 << 1;
        /// There are men on their promotion row.
        const UNPROMOTED_ON_PROMOTION_ROW = 1 << 2;
    }
}

/// Error when a [`Diagram`] can not be set up as a [`Game`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupError {
    kinds: SetupErrorKinds,
}

impl SetupError {
    pub fn kinds(&self) -> SetupErrorKinds {
        self.kinds
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("illegal setup: ")?;

        let mut reasons = Vec::new();
        if self.kinds.contains(SetupErrorKinds::SIZE) {
            reasons.push("unsupported board size");
        }
        if self.kinds.contains(SetupErrorKinds::LIGHT_SQUARE) {
            reasons.push("pieces on light squares");
        }
        if self.kinds.contains(SetupErrorKinds::UNPROMOTED_ON_PROMOTION_ROW) {
            reasons.push("men on promotion row");
        }
        f.write_str(&reasons.join(", "))
    }
}

impl Error for SetupError {}

/// A game of checkers: board, configuration and rules.
///
/// The side to move plays one step or one capture per turn. Men move and
/// capture diagonally forward only, kings in all four diagonal directions,
/// but never more than one step (or one jump) at a time. Captures are not
/// mandatory and there are no multi-jump sequences.
///
/// A side loses when it has no pieces left or none of its pieces can move.
///
/// # Examples
///
/// ```
/// use draughts::{Color, Game, Square};
///
/// let mut game = Game::start(8.0);
/// assert_eq!(game.turn(), Color::White);
///
/// assert!(game.move_piece(Square::new(5, 0), Square::new(4, 1)));
/// assert_eq!(game.turn(), Color::Black);
///
/// // The origin is empty now.
/// assert!(!game.move_piece(Square::new(5, 0), Square::new(4, 1)));
/// assert!(!game.is_game_over());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    config: Config,
    board: Board,
    selection: Option<Square>,
    outcome: Option<Outcome>,
}

impl Game {
    /// Creates a game from an existing board and configuration.
    ///
    /// No game over detection is done. Call
    /// [`check_game_over()`](Game::check_game_over) before the first move
    /// to detect positions where a side is blocked from the start.
    pub fn new(board: Board, config: Config) -> Game {
        Game {
            config,
            board,
            selection: None,
            outcome: None,
        }
    }

    /// Starts a new game with the given (raw) board size: normalizes the
    /// size, sets up the pieces, gives white the move and checks if the
    /// starting position is already decided.
    ///
    /// # Examples
    ///
    /// ```
    /// use draughts::{Color, Game, Reason};
    ///
    /// let game = Game::start(3.0);
    /// assert_eq!(game.board().size(), 4);
    ///
    /// // On the smallest board the armies are locked together.
    /// assert!(game.is_game_over());
    /// assert_eq!(game.winner(), Some(Color::Black));
    /// assert_eq!(game.outcome().map(|o| o.reason), Some(Reason::Blocked));
    /// ```
    pub fn start(size: f64) -> Game {
        let mut config = Config::default();
        config.set_size(size);
        Game::start_with(config)
    }

    /// Like [`start()`](Game::start), but parses the size from raw text
    /// input with [`Config::set_size_ascii()`].
    pub fn start_ascii(size: &[u8]) -> Game {
        let mut config = Config::default();
        config.set_size_ascii(size);
        Game::start_with(config)
    }

    fn start_with(mut config: Config) -> Game {
        config.initialize();
        let mut board = Board::new(&config);
        board.generate();
        let mut game = Game::new(board, config);
        game.check_game_over();
        game
    }

    /// Sets up a game from a diagram.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] if the diagram does not describe a position
    /// that could be reached in a game.
    ///
    /// # Examples
    ///
    /// ```
    /// use draughts::{Color, Diagram, Game};
    ///
    /// let diagram: Diagram = "4/2b1/4/w3 w".parse()?;
    /// let game = Game::from_diagram(&diagram)?;
    /// assert_eq!(game.turn(), Color::White);
    /// assert!(!game.is_game_over());
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_diagram(diagram: &Diagram) -> Result<Game, SetupError> {
        let board = &diagram.board;
        let mut kinds = SetupErrorKinds::empty();

        if !(Config::MIN_SIZE..=Config::MAX_SIZE).contains(&board.size()) {
            kinds |= SetupErrorKinds::SIZE;
        }
        for (sq, piece) in board.pieces() {
            if !sq.is_dark() {
                kinds |= SetupErrorKinds::LIGHT_SQUARE;
            }
            if !piece.king && sq.row() == piece.color.promotion_row(board.size()) {
                kinds |= SetupErrorKinds::UNPROMOTED_ON_PROMOTION_ROW;
            }
        }

        if !kinds.is_empty() {
            return Err(SetupError { kinds });
        }

        let mut config = Config::default();
        config.set_exact_size(board.size());
        config.set_turn(diagram.turn);
        let mut game = Game::new(board.clone(), config);
        game.check_game_over();
        Ok(game)
    }

    /// Exports the current position as a diagram.
    pub fn diagram(&self) -> Diagram {
        Diagram {
            board: self.board.clone(),
            turn: self.turn(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.config.turn()
    }

    /// Currently selected square, see [`touch()`](Game::touch).
    #[inline]
    pub fn selection(&self) -> Option<Square> {
        self.selection
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The winner, if the game is over.
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.outcome.map(|outcome| outcome.winner)
    }

    fn is_valid_destination(&self, to: Square) -> bool {
        self.board.contains(to) && self.board.is_empty(to) && to.is_dark()
    }

    /// Tests if the piece on `from` can step to `to`.
    ///
    /// Does not consider whose turn it is or whether the game is over.
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self.board.piece_at(from) else {
            return false;
        };
        if !self.is_valid_destination(to) {
            return false;
        }

        let m = Move::new(from, to);
        if m.cols().abs() != 1 {
            return false;
        }
        if piece.king {
            m.rows().abs() == 1
        } else {
            m.rows() == piece.color.forward()
        }
    }

    /// Tests if the piece on `from` can jump to `to`, capturing an opposing
    /// piece on the square in between.
    ///
    /// Does not consider whose turn it is or whether the game is over.
    pub fn is_valid_capture(&self, from: Square, to: Square) -> bool {
        let Some(piece) = self.board.piece_at(from) else {
            return false;
        };
        if !self.is_valid_destination(to) {
            return false;
        }

        let m = Move::new(from, to);
        if m.rows().abs() != 2 || m.cols().abs() != 2 {
            return false;
        }
        let captured = from
            .midpoint(to)
            .and_then(|mid| self.board.piece_at(mid));
        if !captured.is_some_and(|captured| captured.color != piece.color) {
            return false;
        }
        piece.king || m.rows() == 2 * piece.color.forward()
    }

    /// Tests if a move would be accepted by [`play()`](Game::play).
    pub fn is_legal(&self, m: Move) -> bool {
        self.validate(m).is_ok()
    }

    /// Tests if a legal move is a capture.
    pub fn is_capture(&self, m: Move) -> bool {
        self.is_legal(m) && self.is_valid_capture(m.from, m.to)
    }

    fn validate(&self, m: Move) -> Result<(), PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }
        let piece = self
            .board
            .piece_at(m.from)
            .ok_or(PlayError::EmptySquare)?;
        if piece.color != self.turn() {
            return Err(PlayError::WrongTurn);
        }
        if self.is_valid_capture(m.from, m.to) || self.is_valid_move(m.from, m.to) {
            Ok(())
        } else {
            Err(PlayError::IllegalMove)
        }
    }

    /// Plays a move for the side to move: a single step or a capture.
    ///
    /// On success, the captured piece (if any) is removed, a man reaching
    /// its promotion row becomes a king, the selection is cleared, the
    /// turn passes to the other side and the game is checked for its end.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError`] and leaves the game unchanged if the move is
    /// not legal.
    pub fn play(&mut self, m: Move) -> Result<Played, PlayError> {
        if let Err(err) = self.validate(m) {
            debug!(%m, %err, "rejected move");
            return Err(err);
        }

        let mut played = Played::default();

        if self.is_valid_capture(m.from, m.to) {
            played.captured = m.from.midpoint(m.to);
            if let Some(captured) = played.captured {
                self.board.remove_piece_at(captured);
            }
        }

        if let Some(mut piece) = self.board.remove_piece_at(m.from) {
            if !piece.king && m.to.row() == piece.color.promotion_row(self.board.size()) {
                piece.promote();
                played.promoted = true;
                trace!(sq = %m.to, color = %piece.color, "promoted");
            }
            self.board.set_piece_at(m.to, Some(piece));
        }

        trace!(%m, ?played, "played move");

        self.selection = None;
        self.config.switch_turn();
        self.check_game_over();

        Ok(played)
    }

    /// Plays a move from `from` to `to`, reporting only whether it was
    /// legal. See [`play()`](Game::play).
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        self.play(Move::new(from, to)).is_ok()
    }

    fn has_action(&self, sq: Square) -> bool {
        let Some(piece) = self.board.piece_at(sq) else {
            return false;
        };
        piece.row_directions().iter().any(|&rows| {
            [-1, 1].into_iter().any(|cols| {
                self.is_valid_move(sq, sq.offset(rows, cols))
                    || self.is_valid_capture(sq, sq.offset(2 * rows, 2 * cols))
            })
        })
    }

    /// Ends the game if a side has no pieces left or none of its pieces
    /// can move.
    ///
    /// Both sides are examined, regardless of whose turn it is. White is
    /// examined first, so if both sides are stuck, black wins. Once the
    /// game is over, it stays over.
    pub fn check_game_over(&mut self) {
        if self.is_game_over() {
            return;
        }

        let mut pieces = ByColor::<usize>::default();
        let mut actions = ByColor::<bool>::default();
        for (sq, piece) in self.board.pieces() {
            if !sq.is_dark() {
                continue;
            }
            *pieces.get_mut(piece.color) += 1;
            if !actions.get(piece.color) && self.has_action(sq) {
                *actions.get_mut(piece.color) = true;
            }
        }

        let stuck = ByColor::new_with(|color| *pieces.get(color) == 0 || !actions.get(color));
        if let Some(loser) = stuck.find(|&stuck| stuck) {
            let outcome = Outcome {
                winner: !loser,
                reason: if *pieces.get(loser) == 0 {
                    Reason::Eliminated
                } else {
                    Reason::Blocked
                },
            };
            info!(%outcome, "game over");
            self.outcome = Some(outcome);
        }
    }

    /// Generates all legal moves of the side to move. Empty if the game is
    /// over.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        if self.is_game_over() {
            return moves;
        }

        let turn = self.turn();
        for (from, piece) in self.board.pieces() {
            if piece.color != turn {
                continue;
            }
            for &rows in piece.row_directions() {
                for cols in [-1, 1] {
                    let step = from.offset(rows, cols);
                    if self.is_valid_move(from, step) {
                        moves.push(Move::new(from, step));
                    }
                    let jump = from.offset(2 * rows, 2 * cols);
                    if self.is_valid_capture(from, jump) {
                        moves.push(Move::new(from, jump));
                    }
                }
            }
        }
        moves
    }

    /// Handles a touch (or click) on a square, tracking the selected piece.
    ///
    /// * Without a selection, touching a piece of the side to move selects
    ///   it.
    /// * Touching the selected piece again deselects it.
    /// * Touching any other square tries to move the selected piece there.
    ///   The selection is cleared if the move succeeds.
    ///
    /// Touches are ignored once the game is over.
    ///
    /// # Examples
    ///
    /// ```
    /// use draughts::{Game, Square, Touch};
    ///
    /// let mut game = Game::start(8.0);
    /// let from = Square::new(5, 2);
    ///
    /// assert_eq!(game.touch(from), Touch::Selected(from));
    /// assert_eq!(game.selection(), Some(from));
    ///
    /// assert!(matches!(game.touch(Square::new(4, 3)), Touch::Moved(_)));
    /// assert_eq!(game.selection(), None);
    /// ```
    pub fn touch(&mut self, sq: Square) -> Touch {
        if self.is_game_over() {
            return Touch::Ignored;
        }

        let touch = match self.selection {
            None => {
                if self
                    .board
                    .piece_at(sq)
                    .is_some_and(|piece| piece.color == self.turn())
                {
                    self.selection = Some(sq);
                    Touch::Selected(sq)
                } else {
                    Touch::Ignored
                }
            }
            Some(selected) if selected == sq => {
                self.selection = None;
                Touch::Deselected
            }
            Some(selected) => match self.play(Move::new(selected, sq)) {
                Ok(played) => Touch::Moved(played),
                Err(err) => Touch::Rejected(err),
            },
        };

        trace!(%sq, ?touch, "touch");
        touch
    }
}
