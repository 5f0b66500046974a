//! History consistency invariant: history length matches occupied squares.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: History length equals number of occupied squares.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().len() == engine.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
