//! Per-piece movement geometry.
//!
//! A piece only knows which shapes of move it can make; whether the squares
//! involved are free, friendly or hostile is the board's business.

use crate::coordinate::Coordinate;
use crate::error::MoveError;
use crate::route::Route;
use crate::types::{Color, PieceKind};

/// The occupant of a square.
///
/// `InitialPawn` is a pawn that has not moved yet and so may still advance
/// two squares; it turns into `Pawn` on its first move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    King(Color),
    Queen(Color),
    Rook(Color),
    Bishop(Color),
    Knight(Color),
    Pawn(Color),
    InitialPawn(Color),
    #[default]
    Empty,
}

impl Piece {
    pub fn color(self) -> Option<Color> {
        match self {
            Piece::King(c)
            | Piece::Queen(c)
            | Piece::Rook(c)
            | Piece::Bishop(c)
            | Piece::Knight(c)
            | Piece::Pawn(c)
            | Piece::InitialPawn(c) => Some(c),
            Piece::Empty => None,
        }
    }

    pub fn kind(self) -> PieceKind {
        match self {
            Piece::King(_) => PieceKind::King,
            Piece::Queen(_) => PieceKind::Queen,
            Piece::Rook(_) => PieceKind::Rook,
            Piece::Bishop(_) => PieceKind::Bishop,
            Piece::Knight(_) => PieceKind::Knight,
            Piece::Pawn(_) => PieceKind::Pawn,
            Piece::InitialPawn(_) => PieceKind::UnmovedPawn,
            Piece::Empty => PieceKind::Empty,
        }
    }

    /// Inverse of [`Piece::kind`] + [`Piece::color`]. The color is ignored
    /// for `PieceKind::Empty`.
    pub fn from_kind(kind: PieceKind, color: Color) -> Piece {
        match kind {
            PieceKind::Empty => Piece::Empty,
            PieceKind::King => Piece::King(color),
            PieceKind::Pawn => Piece::Pawn(color),
            PieceKind::UnmovedPawn => Piece::InitialPawn(color),
            PieceKind::Bishop => Piece::Bishop(color),
            PieceKind::Knight => Piece::Knight(color),
            PieceKind::Queen => Piece::Queen(color),
            PieceKind::Rook => Piece::Rook(color),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    pub fn is_pawn(self) -> bool {
        matches!(self, Piece::Pawn(_) | Piece::InitialPawn(_))
    }

    /// What this piece becomes once it has moved.
    pub fn after_move(self) -> Piece {
        match self {
            Piece::InitialPawn(c) => Piece::Pawn(c),
            other => other,
        }
    }

    /// Whether `from -> to` matches this piece's movement pattern, ignoring
    /// everything else on the board. A move to the same square never does.
    pub fn is_legal_shape(self, from: Coordinate, to: Coordinate) -> bool {
        let dx = to.delta_column(from);
        let dy = to.delta_row(from);
        let (adx, ady) = (dx.abs(), dy.abs());

        match self {
            Piece::King(_) => adx.max(ady) == 1,
            Piece::Knight(_) => (adx, ady) == (1, 2) || (adx, ady) == (2, 1),
            Piece::Rook(_) => is_straight(dx, dy),
            Piece::Bishop(_) => is_diagonal(dx, dy),
            Piece::Queen(_) => is_straight(dx, dy) || is_diagonal(dx, dy),
            Piece::Pawn(c) => is_pawn_step(c, dx, dy),
            Piece::InitialPawn(c) => {
                is_pawn_step(c, dx, dy) || (dx == 0 && dy == 2 * c.forward())
            }
            Piece::Empty => false,
        }
    }

    /// Squares the move passes over, or `IllegalMove` if the piece cannot
    /// make this move at all.
    pub fn plan_route(self, from: Coordinate, to: Coordinate) -> Result<Route, MoveError> {
        if !self.is_legal_shape(from, to) {
            return Err(MoveError::IllegalMove {
                kind: self.kind(),
                from,
                to,
            });
        }

        match self {
            Piece::Rook(_) | Piece::Bishop(_) | Piece::Queen(_) => Route::sliding(from, to),
            Piece::InitialPawn(c) if to.delta_row(from) == 2 * c.forward() => {
                Ok(Route::through(from.offset(0, c.forward())?))
            }
            _ => Ok(Route::empty()),
        }
    }

    /// Single-letter symbol, uppercase for White and lowercase for Black,
    /// `.` for an empty square.
    pub fn symbol(self) -> char {
        let ch = match self {
            Piece::King(_) => 'k',
            Piece::Queen(_) => 'q',
            Piece::Rook(_) => 'r',
            Piece::Bishop(_) => 'b',
            Piece::Knight(_) => 'n',
            Piece::Pawn(_) | Piece::InitialPawn(_) => 'p',
            Piece::Empty => return '.',
        };
        match self.color() {
            Some(Color::White) => ch.to_ascii_uppercase(),
            _ => ch,
        }
    }
}

// Exactly one axis changes.
fn is_straight(dx: i8, dy: i8) -> bool {
    (dx == 0) != (dy == 0)
}

fn is_diagonal(dx: i8, dy: i8) -> bool {
    dx != 0 && dx.abs() == dy.abs()
}

fn is_pawn_step(color: Color, dx: i8, dy: i8) -> bool {
    dy == color.forward() && dx.abs() <= 1
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
