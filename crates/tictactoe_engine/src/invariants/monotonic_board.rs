//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameEngine, Square};
use super::Invariant;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never hit an
/// occupied square and must reproduce the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, PlayerSymbols, Position};

    #[test]
    fn test_fresh_game_holds() {
        let mut engine = GameEngine::default();
        engine.reset();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let engine = GameEngine::replay(PlayerSymbols::default(), &[0, 4, 2, 6]).unwrap();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut engine = GameEngine::replay(PlayerSymbols::default(), &[4]).unwrap();
        engine
            .board
            .set(Position::Center, Square::Occupied(Player::Second));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
