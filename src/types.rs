use serde::{Deserialize, Serialize};

/// Stone color. Also used to name whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
        }
    }

    /// Player code used in [`GameState`]: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Self::Black => 1,
            Self::White => 2,
        }
    }
}

/// Content of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Black => Some(Color::Black),
            Self::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// 0=empty, 1=black, 2=white.
    pub fn code(self) -> u8 {
        self.color().map_or(0, Color::code)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major square index; 0..=63 on the board.
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }
}

/// Who won a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    BlackWins,
    WhiteWins,
    Tie,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub verdict: Verdict,
    pub black_count: u8,
    pub white_count: u8,
}

impl Outcome {
    /// More stones wins; equal counts tie.
    pub fn from_counts(black_count: u8, white_count: u8) -> Self {
        let verdict = if black_count > white_count {
            Verdict::BlackWins
        } else if white_count > black_count {
            Verdict::WhiteWins
        } else {
            Verdict::Tie
        };
        Self {
            verdict,
            black_count,
            white_count,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self.verdict {
            Verdict::BlackWins => Some(Color::Black),
            Verdict::WhiteWins => Some(Color::White),
            Verdict::Tie => None,
        }
    }
}

/// What a successful move changed on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub color: Color,
    pub placed: Position,
    /// Flipped stones in scan order: directions clockwise from north,
    /// nearest stone first within a direction.
    pub flipped: Vec<Position>,
}

impl MoveOutcome {
    /// Flipped stones ordered by distance from the placed stone, for
    /// staggering flip animations outward. Ties keep scan order.
    pub fn flips_by_distance(&self) -> Vec<Position> {
        let origin = self.placed;
        let mut ordered = self.flipped.clone();
        ordered.sort_by_key(|pos| {
            let dr = pos.row as i32 - origin.row as i32;
            let dc = pos.col as i32 - origin.col as i32;
            dr * dr + dc * dc
        });
        ordered
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Vec<u8>,
    pub current_player: u8,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous move left the opponent without a move,
    ///   so `current_player` moves again.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Contract:
    /// - After a move: flipped squares (0..=63) in scan order.
    /// - Before the first move: empty.
    pub flipped: Vec<u8>,
    pub placed: Option<u8>,
}
