use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step a pawn of this color advances by.
    ///
    /// White starts on the high rows and moves toward row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "WHITE",
            Color::Black => "BLACK",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage-level name of a square's occupant.
///
/// This is the vocabulary saved games are written in; `UnmovedPawn` is a
/// pawn that may still make its double step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PieceKind {
    Empty,
    King,
    Pawn,
    UnmovedPawn,
    Bishop,
    Knight,
    Queen,
    Rook,
}

impl PieceKind {
    pub const ALL: [PieceKind; 8] = [
        PieceKind::Empty,
        PieceKind::King,
        PieceKind::Pawn,
        PieceKind::UnmovedPawn,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Queen,
        PieceKind::Rook,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Empty => "EMPTY",
            PieceKind::King => "KING",
            PieceKind::Pawn => "PAWN",
            PieceKind::UnmovedPawn => "UNMOVED_PAWN",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Queen => "QUEEN",
            PieceKind::Rook => "ROOK",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
