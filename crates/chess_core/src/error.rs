//! Error types for move validation, coordinate parsing and snapshots.

use thiserror::Error;

use crate::coordinate::Coordinate;
use crate::types::{Color, PieceKind};

/// Why a move attempt was rejected.
///
/// A rejected move never changes the board or the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position ({column}, {row}) is off the board")]
    OutOfBounds { column: i8, row: i8 },

    #[error("{kind} cannot move from {from} to {to}")]
    IllegalMove {
        kind: PieceKind,
        from: Coordinate,
        to: Coordinate,
    },

    #[error("there is no piece on {0}")]
    NoPieceAtSource(Coordinate),

    #[error("it is {turn}'s turn, the piece on {at} belongs to {owner}")]
    WrongTurn {
        turn: Color,
        owner: Color,
        at: Coordinate,
    },

    #[error("the path is blocked at {0}")]
    BlockedPath(Coordinate),

    #[error("{0} is occupied by your own piece")]
    FriendlyCapture(Coordinate),

    #[error("a pawn cannot move from {from} to {to}: it moves straight onto empty squares and captures diagonally")]
    InvalidPawnCapture { from: Coordinate, to: Coordinate },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateParseError {
    #[error("expected a square like \"e4\", got {0:?}")]
    Malformed(String),
}

/// A stored snapshot that cannot be turned back into a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot holds {0} squares, expected 64")]
    SquareCount(usize),

    #[error("snapshot square ({column}, {row}) is off the board")]
    OutOfBounds { column: i8, row: i8 },

    #[error("snapshot lists {0} more than once")]
    DuplicateSquare(Coordinate),
}
