//! Algebraic square names (`a1`..`h8`) and move transcripts.
//!
//! Column letter first, then row digit. Row 1 is grid row 0, so the
//! standard opening squares d3, c4, f5, e6 are (2,3), (3,2), (4,5), (5,4).

use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;
use crate::types::Position;

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.row >= 8 || self.col >= 8 {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let col = (b'a' + self.col) as char;
        write!(f, "{}{}", col, self.row + 1)
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NotationError::InvalidSquare(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let row = bytes[1].wrapping_sub(b'1');
        if col >= 8 || row >= 8 {
            return Err(invalid());
        }

        Ok(Position::new(row, col))
    }
}

/// Parses a move list such as `"f5d6c3"` or `"F5 d6, c3"`.
pub fn parse_transcript(text: &str) -> Result<Vec<Position>, NotationError> {
    let squares: Vec<(usize, char)> = text
        .char_indices()
        .filter(|(_, ch)| !ch.is_whitespace() && *ch != ',')
        .collect();

    if squares.len() % 2 != 0 {
        let (offset, _) = squares[squares.len() - 1];
        return Err(NotationError::Truncated(offset));
    }

    squares
        .chunks(2)
        .map(|pair| {
            let square: String = pair.iter().map(|(_, ch)| ch).collect();
            square.parse()
        })
        .collect()
}

/// Formats moves back into the compact `"f5d6c3"` form.
pub fn format_transcript(moves: &[Position]) -> String {
    moves.iter().map(Position::to_string).collect()
}
