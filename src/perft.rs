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

use crate::game::Game;

/// Counts legal move paths of a given length.
///
/// Paths that end the game early are not counted unless the game ends in
/// the final position. Useful for comparing, testing and debugging move
/// generation correctness and performance.
///
/// # Examples
///
/// ```
/// use draughts::{perft, Game};
///
/// let game = Game::start(8.0);
/// assert_eq!(perft(&game, 1), 7);
/// assert_eq!(perft(&game, 2), 49);
/// ```
pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth < 1 {
        1
    } else {
        let moves = game.legal_moves();

        if depth == 1 {
            moves.len() as u64
        } else {
            moves
                .iter()
                .filter_map(|&m| {
                    let mut child = game.clone();
                    child.play(m).ok()?;
                    Some(perft(&child, depth - 1))
                })
                .sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_game_has_no_children() {
        let game = Game::start(4.0);
        assert!(game.is_game_over());
        assert_eq!(perft(&game, 0), 1);
        assert_eq!(perft(&game, 1), 0);
        assert_eq!(perft(&game, 3), 0);
    }
}
