//! Browser bindings. A thin wrapper over [`Game`] that hands plain JS
//! objects to the page; rendering, input and sound stay on the JS side.

use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::game::Game;
use crate::types::Position;

#[wasm_bindgen]
pub struct ReversiGame {
    game: Game,
}

#[wasm_bindgen]
impl ReversiGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Accepts `{ firstPlayer: "black" | "white" }`; omitted fields
    /// fall back to the defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<ReversiGame, JsValue> {
        let config: GameConfig = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self {
            game: Game::with_config(config),
        })
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Plays for the side to move and returns the new `GameState`.
    pub fn place(&mut self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        board_position(row, col)
            .and_then(|pos| self.game.play(pos))
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        self.state()
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.legal_moves())?)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_state())?)
    }

    /// Final `Outcome`, or `undefined` while the game is running.
    pub fn result(&self) -> Result<JsValue, JsValue> {
        match self.game.outcome() {
            Some(outcome) => Ok(serde_wasm_bindgen::to_value(&outcome)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Flips from the last move, nearest to the placed stone first.
    #[wasm_bindgen(js_name = flipSequence)]
    pub fn flip_sequence(&self) -> Result<JsValue, JsValue> {
        let flips = self
            .game
            .last_move()
            .map(|mv| mv.flips_by_distance())
            .unwrap_or_default();
        Ok(serde_wasm_bindgen::to_value(&flips)?)
    }

    #[wasm_bindgen(js_name = statusText)]
    pub fn status_text(&self) -> String {
        self.game.status().to_string()
    }
}

impl Default for ReversiGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Range-checks JS coordinates before they are narrowed to a [`Position`].
fn board_position(row: i32, col: i32) -> Result<Position, MoveError> {
    if !Board::is_inside(row, col) {
        return Err(MoveError::OutOfBounds { row, col });
    }
    Ok(Position::new(row as u8, col as u8))
}
