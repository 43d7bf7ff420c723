//! Turn-keeping wrapper around a [`Board`].

use tracing::debug;

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::error::MoveError;
use crate::types::Color;

/// A game in progress: the board plus whose turn it is.
///
/// The turn flips after every successful move and never on a rejected one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    turn: Color,
    board: Board,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard layout, White to move.
    pub fn new() -> Self {
        Self::from_parts(Color::White, Board::standard())
    }

    pub fn from_parts(turn: Color, board: Board) -> Self {
        Self { turn, board }
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_parts(self) -> (Color, Board) {
        (self.turn, self.board)
    }

    /// Play `from -> to` for the side to move.
    pub fn make_move(&mut self, from: Coordinate, to: Coordinate) -> Result<(), MoveError> {
        match self.board.attempt_move(from, to, self.turn) {
            Ok(placed) => {
                debug!(turn = %self.turn, %from, %to, piece = %placed.kind(), "move played");
                self.turn = self.turn.other();
                Ok(())
            }
            Err(e) => {
                debug!(turn = %self.turn, %from, %to, error = %e, "move rejected");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
