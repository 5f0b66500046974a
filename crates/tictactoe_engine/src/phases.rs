//! Outcome and phase of a game.

use super::Player;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
///
/// Derived from the board on every call, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one open cell.
    InProgress,
    /// Player completed a line.
    Win(Player),
    /// Board full without a completed line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Phase of the per-game state machine.
///
/// `Setup -> Playing -> Terminal`, and `Terminal -> Playing` on reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Engine created, no game started.
    Setup,
    /// Game accepts moves.
    Playing,
    /// Game ended with a win or a tie.
    Terminal(Outcome),
}
