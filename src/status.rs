use std::fmt;

use crate::types::{Color, Outcome, Verdict};

/// Headline for a "whose turn" / winner banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    ToMove(Color),
    /// `Color` moves again because the opponent had no legal move.
    ToMoveAfterPass(Color),
    Finished(Outcome),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToMove(color) => write!(f, "{}'s Turn", color.name()),
            Self::ToMoveAfterPass(color) => {
                write!(f, "{}'s Turn (Opponent has no valid moves)", color.name())
            }
            Self::Finished(outcome) => {
                let (black, white) = (outcome.black_count, outcome.white_count);
                match outcome.verdict {
                    Verdict::BlackWins => write!(f, "Game Over! Black wins {black}-{white}"),
                    Verdict::WhiteWins => write!(f, "Game Over! White wins {white}-{black}"),
                    Verdict::Tie => write!(f, "Game Over! Tie game {black}-{white}"),
                }
            }
        }
    }
}
