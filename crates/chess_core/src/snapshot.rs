//! Storable form of a game: the side to move plus a (kind, color) pair for
//! each of the 64 squares.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::error::SnapshotError;
use crate::game::Game;
use crate::piece::Piece;
use crate::types::{Color, PieceKind};

/// Color written for empty squares.
pub const EMPTY_SQUARE_COLOR: Color = Color::White;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareRecord {
    pub column: i8,
    pub row: i8,
    pub kind: PieceKind,
    pub color: Color,
}

impl SquareRecord {
    pub fn new(at: Coordinate, piece: Piece) -> Self {
        Self {
            column: at.column(),
            row: at.row(),
            kind: piece.kind(),
            color: piece.color().unwrap_or(EMPTY_SQUARE_COLOR),
        }
    }

    pub fn piece(&self) -> Piece {
        Piece::from_kind(self.kind, self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub turn: Color,
    pub squares: Vec<SquareRecord>,
}

impl Snapshot {
    pub fn new(turn: Color, board: &Board) -> Self {
        Self {
            turn,
            squares: board.to_squares(),
        }
    }

    pub fn to_board(&self) -> Result<Board, SnapshotError> {
        Board::from_squares(&self.squares)
    }

    pub fn to_game(&self) -> Result<Game, SnapshotError> {
        Ok(Game::from_parts(self.turn, self.to_board()?))
    }

    /// Squares whose kind or color differ between the two snapshots.
    pub fn changed_squares(&self, other: &Snapshot) -> Vec<Coordinate> {
        let mut changed: Vec<Coordinate> = self
            .squares
            .iter()
            .filter(|rec| {
                !other.squares.iter().any(|o| {
                    o.column == rec.column
                        && o.row == rec.row
                        && o.kind == rec.kind
                        && o.color == rec.color
                })
            })
            .filter_map(|rec| Coordinate::new(rec.column, rec.row).ok())
            .collect();
        changed.sort();
        changed
    }
}

impl Board {
    pub fn to_squares(&self) -> Vec<SquareRecord> {
        self.iter()
            .map(|(at, piece)| SquareRecord::new(at, piece))
            .collect()
    }

    /// Rebuild a board from exactly one record per square, in any order.
    pub fn from_squares(records: &[SquareRecord]) -> Result<Board, SnapshotError> {
        if records.len() != 64 {
            return Err(SnapshotError::SquareCount(records.len()));
        }

        let mut seen = [false; 64];
        let mut board = Board::empty();
        for rec in records {
            let at = Coordinate::new(rec.column, rec.row).map_err(|_| {
                SnapshotError::OutOfBounds {
                    column: rec.column,
                    row: rec.row,
                }
            })?;
            if std::mem::replace(&mut seen[at.index()], true) {
                return Err(SnapshotError::DuplicateSquare(at));
            }
            board.place(at, rec.piece());
        }
        Ok(board)
    }
}

impl Game {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.turn(), self.board())
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Game, SnapshotError> {
        snapshot.to_game()
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
