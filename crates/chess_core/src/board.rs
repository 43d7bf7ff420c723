use std::fmt;

use crate::coordinate::Coordinate;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::types::Color;

/// All 64 squares, each holding a piece or `Piece::Empty`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Piece; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [Piece::Empty; 64],
        }
    }

    /// Standard starting layout. Black occupies rows 0-1, White rows 6-7.
    pub fn standard() -> Self {
        let mut b = Board::empty();

        let back: [fn(Color) -> Piece; 8] = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (column, make) in back.iter().enumerate() {
            b.squares[column] = make(Color::Black);
            b.squares[8 + column] = Piece::InitialPawn(Color::Black);
            b.squares[48 + column] = Piece::InitialPawn(Color::White);
            b.squares[56 + column] = make(Color::White);
        }
        b
    }

    pub fn piece_at(&self, at: Coordinate) -> Piece {
        self.squares[at.index()]
    }

    /// Put `piece` on `at`, replacing whatever was there. Used to set up
    /// positions; games change the board only through [`Board::attempt_move`].
    pub fn place(&mut self, at: Coordinate, piece: Piece) {
        self.squares[at.index()] = piece;
    }

    pub fn with(mut self, at: Coordinate, piece: Piece) -> Self {
        self.place(at, piece);
        self
    }

    /// Every square with its occupant, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::ALL
            .iter()
            .map(move |&at| (at, self.squares[at.index()]))
    }

    /// Validate and play `from -> to` for `mover`, returning the piece that
    /// now stands on `to`.
    ///
    /// All checks run before anything is written, so on error the board is
    /// exactly as it was.
    pub fn attempt_move(
        &mut self,
        from: Coordinate,
        to: Coordinate,
        mover: Color,
    ) -> Result<Piece, MoveError> {
        let moving = self.piece_at(from);
        let owner = moving.color().ok_or(MoveError::NoPieceAtSource(from))?;
        if owner != mover {
            return Err(MoveError::WrongTurn {
                turn: mover,
                owner,
                at: from,
            });
        }

        let route = moving.plan_route(from, to)?;
        if let Some(&blocker) = route.iter().find(|&&sq| !self.piece_at(sq).is_empty()) {
            return Err(MoveError::BlockedPath(blocker));
        }

        let target = self.piece_at(to);
        if target.color() == Some(mover) {
            return Err(MoveError::FriendlyCapture(to));
        }

        if moving.is_pawn() {
            let diagonal = to.delta_column(from) != 0;
            let captures = target.color() == Some(mover.other());
            // Diagonal steps must capture, straight steps must land on empty.
            if diagonal != captures {
                return Err(MoveError::InvalidPawnCapture { from, to });
            }
        }

        let placed = moving.after_move();
        self.place(to, placed);
        self.place(from, Piece::Empty);
        Ok(placed)
    }
}

/// Eight lines, row 0 first: uppercase White, lowercase Black, `.` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.squares.chunks(8) {
            let line: String = row.iter().map(|p| p.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
