use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{MoveError, ReplayError};
use crate::status::Status;
use crate::types::{Cell, Color, GameState, MoveOutcome, Outcome, Position};

/// One game of Reversi: the grid plus whose turn it is and, once over,
/// the outcome.
///
/// The board only changes through [`Game::apply_move`] (or [`Game::play`]),
/// and every move resolves the next turn before returning:
/// - the opponent moves next if it has a legal move,
/// - otherwise the mover goes again (forced pass),
/// - otherwise, or when the board is full, the game is over.
///
/// So a game that is not over always has a legal move for [`Game::turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    outcome: Option<Outcome>,
    passed: Option<Color>,
    last_move: Option<MoveOutcome>,
    config: GameConfig,
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            turn: config.first_player,
            outcome: None,
            passed: None,
            last_move: None,
            config,
        }
    }

    /// Starts a game from an arbitrary board with `turn` to move.
    ///
    /// The position is normalized like a position reached by play: if
    /// `turn` has no move the turn passes, and if neither side has one
    /// (or the board is full) the game is already over. No move has been
    /// played yet, so such a pass is not reported by [`Game::last_pass`].
    pub fn from_position(board: Board, turn: Color) -> Self {
        let mut game = Self {
            board,
            turn,
            outcome: None,
            passed: None,
            last_move: None,
            config: GameConfig::default(),
        };
        game.resolve_turn(turn.opponent());
        game.passed = None;
        game
    }

    /// Plays `moves` from the opening position, each by whoever is to move.
    pub fn replay(moves: &[Position]) -> Result<Self, ReplayError> {
        let mut game = Self::new();
        for (index, &position) in moves.iter().enumerate() {
            game.play(position).map_err(|source| ReplayError {
                index,
                position,
                source,
            })?;
        }
        Ok(game)
    }

    /// Back to the standard opening with black to move, whatever config
    /// this game was started with.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_inside(row: i32, col: i32) -> bool {
        Board::is_inside(row, col)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        self.board.cell_at(row, col)
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Set exactly when the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The side whose turn the last move skipped, if any.
    pub fn last_pass(&self) -> Option<Color> {
        self.passed
    }

    pub fn last_move(&self) -> Option<&MoveOutcome> {
        self.last_move.as_ref()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn legal_destinations_for(&self, color: Color) -> Vec<Position> {
        self.board.legal_destinations_for(color)
    }

    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.board.has_any_legal_move(color)
    }

    pub fn cells_to_flip(&self, pos: Position, color: Color) -> Vec<Position> {
        self.board.cells_to_flip(pos, color)
    }

    /// Legal destinations for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_destinations_for(self.turn)
    }

    /// Places a `color` stone at `pos`, flips what it brackets and
    /// resolves the next turn.
    ///
    /// An illegal placement returns an error and leaves the game as it was.
    ///
    /// # Panics
    ///
    /// If the game is over or `color` is not the side to move. Both mean
    /// the caller lost track of the game state.
    pub fn apply_move(&mut self, pos: Position, color: Color) -> Result<MoveOutcome, MoveError> {
        assert!(
            !self.is_terminal(),
            "apply_move({pos:?}, {color:?}) called after the game ended"
        );
        assert_eq!(
            color, self.turn,
            "apply_move({pos:?}) called for {color:?} but {:?} is to move",
            self.turn
        );

        if !Board::is_inside(pos.row as i32, pos.col as i32) {
            return Err(MoveError::OutOfBounds {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        if self.board.cell(pos) != Some(Cell::Empty) {
            return Err(MoveError::Occupied(pos));
        }

        let flipped = self.board.cells_to_flip(pos, color);
        if flipped.is_empty() {
            return Err(MoveError::NoFlips(pos));
        }

        self.board.place(pos, &flipped, color);
        debug!("{} plays {pos}, flipping {}\n{}", color.name(), flipped.len(), self.board);

        let outcome = MoveOutcome {
            color,
            placed: pos,
            flipped,
        };
        self.last_move = Some(outcome.clone());
        self.resolve_turn(color);

        Ok(outcome)
    }

    /// [`Game::apply_move`] for the side to move. Input after the game
    /// ended is rejected with [`MoveError::GameOver`] instead of panicking.
    pub fn play(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.apply_move(pos, self.turn)
    }

    pub fn status(&self) -> Status {
        match (self.outcome, self.passed) {
            (Some(outcome), _) => Status::Finished(outcome),
            (None, Some(_)) => Status::ToMoveAfterPass(self.turn),
            (None, None) => Status::ToMove(self.turn),
        }
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.turn.code(),
            black_count,
            white_count,
            is_game_over: self.is_terminal(),
            is_pass: self.passed.is_some(),
            flipped: self
                .last_move
                .as_ref()
                .map(|mv| mv.flipped.iter().map(|pos| pos.index() as u8).collect())
                .unwrap_or_default(),
            placed: self.last_move.as_ref().map(|mv| mv.placed.index() as u8),
        }
    }

    /// Decides who moves after `mover`, or ends the game.
    fn resolve_turn(&mut self, mover: Color) {
        let next = mover.opponent();
        self.passed = None;

        if self.board.is_full() {
            self.finish();
        } else if self.board.has_any_legal_move(next) {
            self.turn = next;
        } else if self.board.has_any_legal_move(mover) {
            debug!("{} has no legal move, {} moves again", next.name(), mover.name());
            self.turn = mover;
            self.passed = Some(next);
        } else {
            self.finish();
        }
    }

    fn finish(&mut self) {
        let (black_count, white_count) = self.board.count();
        let outcome = Outcome::from_counts(black_count, white_count);
        info!("game over: {:?} {black_count}-{white_count}", outcome.verdict);
        self.outcome = Some(outcome);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verdict;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn board(diagram: &str) -> Board {
        diagram.parse().unwrap()
    }

    #[test]
    fn initial_state_is_correct() {
        let game = Game::new();
        let state = game.to_game_state();

        assert_eq!(game.turn(), Color::Black);
        assert!(!game.is_terminal());
        assert_eq!(game.outcome(), None);
        assert_eq!(state.current_player, 1);
        assert_eq!(state.black_count, 2);
        assert_eq!(state.white_count, 2);
        assert!(!state.is_game_over);
        assert!(!state.is_pass);
        assert!(state.flipped.is_empty());
        assert_eq!(state.placed, None);
        assert_eq!(game.legal_moves().len(), 4);
        assert_eq!(game.status().to_string(), "Black's Turn");
    }

    #[test]
    fn black_opening_d3_captures_d4() {
        let mut game = Game::new();

        let mv = game.apply_move(pos(2, 3), Color::Black).unwrap();

        assert_eq!(mv.placed, pos(2, 3));
        assert_eq!(mv.flipped, vec![pos(3, 3)]);
        assert_eq!(game.cell(2, 3), Some(Cell::Black));
        assert_eq!(game.cell(3, 3), Some(Cell::Black));
        assert_eq!(game.cell(3, 4), Some(Cell::Black));
        assert_eq!(game.board().count(), (4, 1));
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.to_game_state().flipped, vec![27]);
        assert_eq!(game.to_game_state().placed, Some(19));
    }

    #[test]
    fn t02_illegal_player_move_returns_error_without_mutation() {
        let mut game = Game::new();
        let before = game.clone();

        assert_eq!(
            game.apply_move(pos(0, 0), Color::Black),
            Err(MoveError::NoFlips(pos(0, 0)))
        );
        assert_eq!(
            game.apply_move(pos(3, 3), Color::Black),
            Err(MoveError::Occupied(pos(3, 3)))
        );
        assert_eq!(
            game.apply_move(pos(8, 2), Color::Black),
            Err(MoveError::OutOfBounds { row: 8, col: 2 })
        );
        assert_eq!(game, before);
    }

    #[test]
    #[should_panic(expected = "is to move")]
    fn apply_move_for_wrong_color_panics() {
        let mut game = Game::new();
        let _ = game.apply_move(pos(2, 4), Color::White);
    }

    #[test]
    #[should_panic(expected = "after the game ended")]
    fn apply_move_after_game_over_panics() {
        let mut game = Game::from_position(Board::empty(), Color::Black);
        let _ = game.apply_move(pos(0, 0), Color::Black);
    }

    #[test]
    fn t03_forced_pass_keeps_turn_with_mover() {
        let mut game = Game::from_position(
            board(
                "
                B W W . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                B W . . . . . .
                ",
            ),
            Color::Black,
        );
        assert!(!game.has_any_legal_move(Color::White));
        assert_eq!(game.turn(), Color::Black);

        let mv = game.apply_move(pos(0, 3), Color::Black).unwrap();

        assert_eq!(mv.flipped, vec![pos(0, 2), pos(0, 1)]);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.last_pass(), Some(Color::White));
        assert!(game.to_game_state().is_pass);
        assert!(!game.is_terminal());
        assert_eq!(
            game.status().to_string(),
            "Black's Turn (Opponent has no valid moves)"
        );

        // Last white stone goes; nobody can move.
        game.apply_move(pos(7, 2), Color::Black).unwrap();

        assert!(game.is_terminal());
        assert_eq!(game.last_pass(), None);
        assert_eq!(game.outcome(), Some(Outcome::from_counts(7, 0)));
        assert_eq!(game.status().to_string(), "Game Over! Black wins 7-0");
    }

    #[test]
    fn t05_full_board_after_move_sets_game_over() {
        let mut diagram = String::from(". B W W W W W W\n");
        diagram.push_str(&"W W W W W W W W\n".repeat(6));
        diagram.push_str("B B B B B B B B\n");
        let mut game = Game::from_position(board(&diagram), Color::White);
        assert_eq!(game.turn(), Color::White);

        let mv = game.apply_move(pos(0, 0), Color::White).unwrap();
        let state = game.to_game_state();

        assert_eq!(mv.flipped, vec![pos(0, 1)]);
        assert!(state.is_game_over);
        assert_eq!(state.black_count, 8);
        assert_eq!(state.white_count, 56);
        assert_eq!(
            game.outcome().map(|outcome| outcome.verdict),
            Some(Verdict::WhiteWins)
        );
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn from_position_passes_when_side_to_move_is_stuck() {
        let game = Game::from_position(
            board(
                "
                B W W . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                ",
            ),
            Color::White,
        );

        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.last_pass(), None);
        assert!(!game.is_terminal());
        assert_eq!(game.status().to_string(), "Black's Turn");
        assert!(!game.to_game_state().is_pass);
    }

    #[test]
    fn from_position_with_no_moves_is_terminal() {
        let game = Game::from_position(Board::empty(), Color::Black);

        assert!(game.is_terminal());
        assert_eq!(game.outcome(), Some(Outcome::from_counts(0, 0)));
        assert_eq!(game.status().to_string(), "Game Over! Tie game 0-0");
    }

    #[test]
    fn play_after_game_over_is_rejected() {
        let mut game = Game::from_position(Board::empty(), Color::Black);

        let err = game.play(pos(0, 0)).unwrap_err();

        assert_eq!(err, MoveError::GameOver);
        assert!(!err.is_illegal_move());
    }

    #[test]
    fn replay_reports_the_offending_move() {
        let moves = [pos(2, 3), pos(0, 0)];

        let err = Game::replay(&moves).unwrap_err();

        assert_eq!(err.index, 1);
        assert_eq!(err.position, pos(0, 0));
        assert_eq!(err.source, MoveError::NoFlips(pos(0, 0)));
    }

    #[test]
    fn reset_always_hands_the_opening_to_black() {
        let mut game = Game::with_config(GameConfig {
            first_player: Color::White,
        });
        assert_eq!(game.turn(), Color::White);
        game.play(pos(2, 4)).unwrap();

        game.reset();

        assert_eq!(game, Game::new());
        assert_eq!(game.board().count(), (2, 2));
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.config(), GameConfig::default());
    }

    #[test]
    fn queries_do_not_mutate() {
        let game = Game::new();
        let before = game.clone();

        for _ in 0..3 {
            let _ = game.legal_destinations_for(Color::Black);
            let _ = game.cells_to_flip(pos(2, 3), Color::Black);
            let _ = game.has_any_legal_move(Color::White);
        }

        assert_eq!(game, before);
    }
}
