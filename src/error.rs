use crate::types::Position;

/// Rejected move. Recoverable: the board is left untouched and the
/// caller just ignores the input.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates outside the 8x8 grid.
    #[error("position out of bounds: ({row}, {col})")]
    OutOfBounds { row: i32, col: i32 },

    /// Target square already holds a stone.
    #[error("illegal move at {0}: square is occupied")]
    Occupied(Position),

    /// Placing here would not bracket any opposing stone.
    #[error("illegal move at {0}: nothing to flip")]
    NoFlips(Position),

    /// Input arrived after the game ended.
    #[error("game is already over")]
    GameOver,
}

impl MoveError {
    /// True for the three ways a placement itself can be illegal.
    pub fn is_illegal_move(&self) -> bool {
        !matches!(self, Self::GameOver)
    }
}

/// Malformed algebraic coordinate or transcript.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square {0:?}: expected a column a-h followed by a row 1-8")]
    InvalidSquare(String),

    #[error("transcript has a dangling character at offset {0}")]
    Truncated(usize),
}

/// Malformed board diagram.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} squares, expected 8")]
    RowWidth { row: usize, len: usize },

    #[error("unknown glyph {glyph:?} in row {row}")]
    UnknownGlyph { row: usize, glyph: char },
}

/// A transcript move that could not be played.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("move {index} ({position}) rejected")]
pub struct ReplayError {
    /// Zero-based move number within the transcript.
    pub index: usize,
    pub position: Position,
    #[source]
    pub source: MoveError,
}
