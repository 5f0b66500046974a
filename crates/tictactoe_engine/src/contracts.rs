//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. The engine checks preconditions on every move and
//! postconditions in debug builds.

use super::action::MoveError;
use super::invariants::{BoardInvariants, InvariantSet};
use super::{GameEngine, Phase, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The engine must be in the playing phase.
pub struct GameIsLive;

impl GameIsLive {
    /// Rejects moves before reset and after a terminal outcome.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        match engine.phase() {
            Phase::Playing => Ok(()),
            Phase::Setup => Err(MoveError::NotStarted),
            Phase::Terminal(_) => Err(MoveError::GameOver),
        }
    }
}

/// Precondition: The index must name a cell and that cell must be empty.
pub struct CellIsOpen;

impl CellIsOpen {
    /// Resolves the index to an empty position.
    #[instrument(skip(engine))]
    pub fn check(index: usize, engine: &GameEngine) -> Result<Position, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if engine.board().is_empty(position) {
            Ok(position)
        } else {
            Err(MoveError::CellOccupied(position))
        }
    }
}

/// Composite precondition: the game is live and the cell is open.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(engine))]
    pub fn check(index: usize, engine: &GameEngine) -> Result<Position, MoveError> {
        GameIsLive::check(engine)?;
        CellIsOpen::check(index, engine)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions, keyed by 0-based cell index.
///
/// Preconditions:
/// - Game is live
/// - Index is in range and its cell is empty
///
/// Postconditions:
/// - Exactly one square was filled
/// - Board remains monotonic and consistent with history
pub struct MoveContract;

impl Contract<GameEngine, usize> for MoveContract {
    fn pre(engine: &GameEngine, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, engine).map(|_| ())
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        if after.board().occupied() != before.board().occupied() + 1 {
            warn!(
                before = before.board().occupied(),
                after = after.board().occupied(),
                "Move did not fill exactly one square"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must fill exactly one square".to_string(),
            ));
        }

        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, PlayerSymbols, Square};

    fn started() -> GameEngine {
        let mut engine = GameEngine::default();
        engine.reset();
        engine
    }

    #[test]
    fn test_precondition_empty_square() {
        assert!(MoveContract::pre(&started(), &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let engine = GameEngine::replay(PlayerSymbols::default(), &[4]).unwrap();
        assert_eq!(
            MoveContract::pre(&engine, &4),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        assert_eq!(
            MoveContract::pre(&started(), &9),
            Err(MoveError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_precondition_not_started() {
        assert_eq!(
            MoveContract::pre(&GameEngine::default(), &0),
            Err(MoveError::NotStarted)
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let engine = GameEngine::replay(PlayerSymbols::default(), &[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(MoveContract::pre(&engine, &8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = started();
        let mut after = before.clone();
        after.apply_move(4).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = started();
        let mut after = before.clone();
        after
            .board
            .set(Position::TopLeft, Square::Occupied(Player::Second));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
