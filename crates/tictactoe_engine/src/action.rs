//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The engine records every
//! accepted move so the invariants can replay them.

use super::{Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error raised when a move is rejected.
///
/// A rejected move never touches the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Cell index {} is out of bounds (expected 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game already ended with a win or a tie.
    #[display("Game is already over")]
    GameOver,

    /// No game was started on this engine.
    #[display("Game hasn't started yet")]
    NotStarted,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// True for moves rejected because of the target cell.
    ///
    /// These are recoverable by asking the player again.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, MoveError::OutOfBounds(_) | MoveError::CellOccupied(_))
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_class() {
        assert!(MoveError::OutOfBounds(9).is_invalid_move());
        assert!(MoveError::CellOccupied(Position::Center).is_invalid_move());
        assert!(!MoveError::GameOver.is_invalid_move());
        assert!(!MoveError::NotStarted.is_invalid_move());
    }

    #[test]
    fn test_error_messages() {
        assert!(MoveError::CellOccupied(Position::TopLeft)
            .to_string()
            .contains("occupied"));
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }
}
