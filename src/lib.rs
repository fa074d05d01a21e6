//! Rules engine for Reversi/Othello: board state, legal moves, flip
//! resolution, turn passing and end-of-game scoring.
//!
//! ```
//! use reversi_engine::{Color, Game, Position};
//!
//! let mut game = Game::new();
//! let mv = game.apply_move(Position::new(2, 3), Color::Black).unwrap();
//!
//! assert_eq!(mv.flipped, vec![Position::new(3, 3)]);
//! assert_eq!(game.turn(), Color::White);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod notation;
pub mod status;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::GameConfig;
pub use error::{BoardParseError, MoveError, NotationError, ReplayError};
pub use game::Game;
pub use status::Status;
pub use types::{Cell, Color, GameState, MoveOutcome, Outcome, Position, Verdict};
