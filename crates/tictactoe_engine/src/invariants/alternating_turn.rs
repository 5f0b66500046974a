//! Alternating turn invariant: players alternate First, Second, First, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show First, Second, First, ... and the active
/// player must match the history parity. Only meaningful between
/// complete move/advance cycles.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if history.first().is_some_and(|m| m.player != Player::First) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::First
        } else {
            Player::Second
        };

        engine.active_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (First, Second, First, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerSymbols;

    #[test]
    fn test_fresh_game_holds() {
        let mut engine = GameEngine::default();
        engine.reset();
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let engine = GameEngine::replay(PlayerSymbols::default(), &[0, 4, 2, 6, 8]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.active_player(), Player::Second);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut engine = GameEngine::default();
        engine.reset();
        engine.apply_move(0).unwrap();
        engine.apply_move(4).unwrap();
        engine.advance_turn();
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_mid_cycle_does_not_hold() {
        let mut engine = GameEngine::default();
        engine.reset();
        engine.apply_move(0).unwrap();
        assert!(!AlternatingTurnInvariant::holds(&engine));
        engine.advance_turn();
        assert!(AlternatingTurnInvariant::holds(&engine));
    }
}
