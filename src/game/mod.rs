// Copyright 2026 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

//! Per-session game handles.
//!
//! The board itself is stateless-by-injection: one `Board` serves one
//! game and nothing is shared between games. A deployment serving many
//! simultaneous games owns a mapping from `GameId` to `Game`, each with
//! its own independently owned board and history. `Game` also enforces
//! the caller-side gate the board deliberately does not: once a winner is
//! set, no further moves are accepted.

use anyhow::Result;
#[cfg(feature = "random")]
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Color, MoveKind};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Game over. {0} has won.")]
    Finished(Color),
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameId(u64);

impl GameId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
    #[cfg(feature = "random")]
    pub fn random() -> Self {
        Self(thread_rng().gen())
    }
}

/// One session: an id and its independently owned board, started and
/// ready to play.
#[derive(Debug)]
pub struct Game {
    id: GameId,
    board: Board,
}

impl Game {
    pub fn new(id: GameId) -> Self {
        let mut board = Board::new();
        board.start();
        Self { id, board }
    }

    #[inline]
    pub fn id(&self) -> GameId {
        self.id
    }
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
    #[inline]
    pub fn finished(&self) -> bool {
        self.board.winner().is_some()
    }

    /// Submit a textual move command, refusing all input once the game
    /// has been won.
    pub fn submit(&mut self, input: &str) -> Result<MoveKind> {
        if let Some(winner) = self.board.winner() {
            return Err(GameError::Finished(winner).into());
        }
        self.board.submit(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Material, Square, Turn};

    #[test]
    fn test_new_game_is_started() {
        let game = Game::new(GameId::new(7));
        assert_eq!(game.id(), GameId::new(7));
        assert_eq!(game.board().turn(), Color::White);
        assert!(!game.finished());
    }
    #[test]
    fn test_games_are_independent() {
        let mut first = Game::new(GameId::new(1));
        let second = Game::new(GameId::new(2));
        first.submit("01 02").unwrap();
        assert!(first.board().get_piece(Square::new(0, 2)).is_some());
        assert!(second.board().get_piece(Square::new(0, 2)).is_none());
    }
    #[test]
    fn test_no_moves_accepted_after_win() {
        let mut game = Game::new(GameId::new(3));
        // strip the board down to a forced king capture
        let board = game.board_mut();
        for row in 0..8 {
            for col in 0..8 {
                board.position_mut().remove(Square::new(col, row));
            }
        }
        board.position_mut().insert(Square::new(0, 0), Material::WQ);
        board.position_mut().insert(Square::new(7, 0), Material::WK);
        board.position_mut().insert(Square::new(0, 7), Material::BK);
        game.submit("00 07").unwrap();
        assert!(game.finished());
        let err = game.submit("70 71").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::Finished(Color::White))
        ));
    }
    #[cfg(feature = "random")]
    #[test]
    fn test_random_ids_differ() {
        // collisions are possible in principle, vanishingly unlikely here
        assert_ne!(GameId::random(), GameId::random());
    }
}
