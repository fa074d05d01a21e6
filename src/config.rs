use serde::Deserialize;

use crate::types::Color;

/// Per-game rule options.
///
/// Deserializable from a JS object such as `{ firstPlayer: "white" }`;
/// missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Side that opens the game. Official rules: black.
    pub first_player: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Color::Black,
        }
    }
}
