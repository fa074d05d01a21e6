use std::fmt;
use std::str::FromStr;

use crate::error::BoardParseError;
use crate::types::{Cell, Color, Position};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Compass directions as `(d_row, d_col)`, clockwise from north.
/// Flip lists are reported in this order.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// The 8x8 grid of cells. Holds no turn or game-over state; see
/// [`crate::game::Game`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// True iff `0 <= row < 8` and `0 <= col < 8`.
    pub fn is_inside(row: i32, col: i32) -> bool {
        (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
    }

    /// Cell at `(row, col)`, or `None` off the board.
    pub fn cell_at(&self, row: i32, col: i32) -> Option<Cell> {
        if Self::is_inside(row, col) {
            Some(self.cells[row as usize][col as usize])
        } else {
            None
        }
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cell_at(pos.row as i32, pos.col as i32)
    }

    /// Stones `color` would flip by playing at `pos`, direction by
    /// direction, nearest first. Empty when `pos` is off the board,
    /// occupied, or brackets nothing.
    pub fn cells_to_flip(&self, pos: Position, color: Color) -> Vec<Position> {
        let (row, col) = (pos.row as i32, pos.col as i32);
        if self.cell_at(row, col) != Some(Cell::Empty) {
            return Vec::new();
        }

        let mut flips = Vec::new();
        for dir in DIRECTIONS {
            let run = self.bracketed_run(row, col, dir, color);
            let (dr, dc) = dir;
            flips.extend((1..=run as i32).map(|step| {
                Position::new((row + dr * step) as u8, (col + dc * step) as u8)
            }));
        }
        flips
    }

    /// Whether `color` may play at `pos`.
    pub fn is_legal(&self, pos: Position, color: Color) -> bool {
        let (row, col) = (pos.row as i32, pos.col as i32);
        self.cell_at(row, col) == Some(Cell::Empty)
            && DIRECTIONS
                .iter()
                .any(|&dir| self.bracketed_run(row, col, dir, color) > 0)
    }

    /// Every legal destination for `color`, in row-major order.
    pub fn legal_destinations_for(&self, color: Color) -> Vec<Position> {
        Self::positions()
            .filter(|&pos| self.is_legal(pos, color))
            .collect()
    }

    pub fn has_any_legal_move(&self, color: Color) -> bool {
        Self::positions().any(|pos| self.is_legal(pos, color))
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.cells
            .iter()
            .flatten()
            .fold((0, 0), |(black, white), cell| match cell {
                Cell::Black => (black + 1, white),
                Cell::White => (black, white + 1),
                Cell::Empty => (black, white),
            })
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (code, cell) in board.iter_mut().zip(self.cells.iter().flatten()) {
            *code = cell.code();
        }
        board
    }

    /// Puts `color` on `placed` and on every square in `flips`. Callers
    /// must pass the result of [`Board::cells_to_flip`] for the same move.
    pub(crate) fn place(&mut self, placed: Position, flips: &[Position], color: Color) {
        let stone = Cell::from(color);
        for pos in std::iter::once(&placed).chain(flips) {
            self.cells[pos.row as usize][pos.col as usize] = stone;
        }
    }

    fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Position::new(row, col)))
    }

    /// Walks from `(row, col)` along `dir` and returns the length of the
    /// run of opposing stones closed off by a `color` stone. Zero when
    /// the run ends at an empty square or the edge instead.
    fn bracketed_run(&self, row: i32, col: i32, (dr, dc): (i32, i32), color: Color) -> usize {
        let own = Cell::from(color);
        let opponent = Cell::from(color.opponent());
        let mut r = row + dr;
        let mut c = col + dc;
        let mut run = 0;

        while let Some(cell) = self.cell_at(r, c) {
            if cell == opponent {
                run += 1;
            } else if cell == own {
                return run;
            } else {
                return 0;
            }
            r += dr;
            c += dc;
        }

        0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One row per line, `B`/`W`/`.` separated by spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::Black => "B",
                    Cell::White => "W",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Reads the [`Display`](fmt::Display) form back. Also accepts `X`/`O`
/// for black/white and `-` for empty; spaces are ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|ch| !ch.is_whitespace()).collect();
            if glyphs.len() != BOARD_SIZE {
                return Err(BoardParseError::RowWidth {
                    row,
                    len: glyphs.len(),
                });
            }
            for (col, glyph) in glyphs.into_iter().enumerate() {
                board.cells[row][col] = match glyph.to_ascii_uppercase() {
                    'B' | 'X' => Cell::Black,
                    'W' | 'O' => Cell::White,
                    '.' | '-' => Cell::Empty,
                    _ => return Err(BoardParseError::UnknownGlyph { row, glyph }),
                };
            }
        }

        Ok(board)
    }
}
