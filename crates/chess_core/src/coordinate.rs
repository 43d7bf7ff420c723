use std::fmt;
use std::str::FromStr;

use crate::error::{CoordinateParseError, MoveError};

pub const BOARD_SIZE: i8 = 8;

/// A square on the board, addressed by column (0..8, left to right) and
/// row (0..8, top to bottom). Row 0 is Black's back rank.
///
/// Coordinates are plain values: two coordinates with the same column and
/// row are equal however they were obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    column: i8,
    row: i8,
}

impl Coordinate {
    /// Every square in row-major order. `Coordinate::ALL[c.index()] == c`.
    pub const ALL: [Coordinate; 64] = {
        let mut all = [Coordinate { column: 0, row: 0 }; 64];
        let mut i = 0;
        while i < 64 {
            all[i] = Coordinate {
                column: (i % 8) as i8,
                row: (i / 8) as i8,
            };
            i += 1;
        }
        all
    };

    pub fn new(column: i8, row: i8) -> Result<Self, MoveError> {
        if (0..BOARD_SIZE).contains(&column) && (0..BOARD_SIZE).contains(&row) {
            Ok(Self { column, row })
        } else {
            Err(MoveError::OutOfBounds { column, row })
        }
    }

    pub fn column(self) -> i8 {
        self.column
    }

    pub fn row(self) -> i8 {
        self.row
    }

    /// Row-major index into a 64-entry array.
    #[inline]
    pub fn index(self) -> usize {
        (self.row as usize) * 8 + self.column as usize
    }

    pub fn offset(self, dx: i8, dy: i8) -> Result<Self, MoveError> {
        Self::new(self.column.saturating_add(dx), self.row.saturating_add(dy))
    }

    /// `self.column - other.column`
    pub fn delta_column(self, other: Coordinate) -> i8 {
        self.column - other.column
    }

    /// `self.row - other.row`
    pub fn delta_row(self, other: Coordinate) -> i8 {
        self.row - other.row
    }
}

// Algebraic names: files a..h are columns 0..7, ranks 1..8 are rows 7..0.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.column as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordinateParseError::Malformed(s.to_string());
        let b = s.trim().as_bytes();
        if b.len() != 2 {
            return Err(malformed());
        }
        let f = b[0].to_ascii_lowercase();
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return Err(malformed());
        }
        let column = (f - b'a') as i8;
        let row = (b'8' - r) as i8;
        Self::new(column, row).map_err(|_| malformed())
    }
}

#[cfg(test)]
#[path = "coordinate_tests.rs"]
mod coordinate_tests;
