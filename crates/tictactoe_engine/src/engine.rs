//! The game engine: sole authority over board mutation and outcome.

use super::action::{Move, MoveError};
use super::contracts::LegalMove;
use super::phases::{Outcome, Phase};
use super::{Board, Player, PlayerSymbols, Position, Square, rules};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board, the active player and the move history of the current
/// game. Moving and advancing the turn are separate steps so callers can
/// inspect the outcome before handing over to the next player.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: Board,
    to_move: Player,
    history: Vec<Move>,
    symbols: PlayerSymbols,
    started: bool,
}

impl GameEngine {
    /// Creates an engine in the setup phase.
    #[instrument]
    pub fn new(symbols: PlayerSymbols) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::First,
            history: Vec::new(),
            symbols,
            started: false,
        }
    }

    /// Starts a fresh game: empty board, first player to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::First;
        self.history.clear();
        self.started = true;
        debug!("Board reset");
    }

    /// Returns true iff `index` names an empty cell.
    pub fn is_cell_open(&self, index: usize) -> bool {
        Position::from_index(index).is_some_and(|pos| self.board.is_empty(pos))
    }

    /// Writes the active player's mark at `index` (0-8).
    ///
    /// Does not advance the turn.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` / `CellOccupied` if the cell can't take a mark
    /// - `GameOver` once the game has a winner or ended in a tie
    /// - `NotStarted` before the first [`reset`](Self::reset)
    ///
    /// The engine is unchanged on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<Move, MoveError> {
        let position = LegalMove::check(index, self).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let action = Move::new(self.to_move, position);
        self.board.set(position, Square::Occupied(action.player));
        self.history.push(action);

        #[cfg(debug_assertions)]
        {
            use super::contracts::{Contract, MoveContract};
            MoveContract::post(&before, self)?;
        }

        debug!(position = %position, "Move applied");
        Ok(action)
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self))]
    pub fn advance_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Evaluates the current board.
    pub fn evaluate_outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Current phase of the game state machine.
    pub fn phase(&self) -> Phase {
        if !self.started {
            return Phase::Setup;
        }
        match self.evaluate_outcome() {
            Outcome::InProgress => Phase::Playing,
            outcome => Phase::Terminal(outcome),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> Player {
        self.to_move
    }

    /// Returns the move history of the current game.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the symbol pair.
    pub fn symbols(&self) -> &PlayerSymbols {
        &self.symbols
    }

    /// Returns the symbol of a player.
    pub fn symbol(&self, player: Player) -> &str {
        self.symbols.symbol(player)
    }

    /// Returns the open positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Plays `indices` from a fresh game as alternating move/advance cycles.
    ///
    /// Stops after the move that ends the game. Fails with the first
    /// rejected move.
    #[instrument(skip(symbols))]
    pub fn replay(symbols: PlayerSymbols, indices: &[usize]) -> Result<Self, MoveError> {
        let mut engine = Self::new(symbols);
        engine.reset();

        for &index in indices {
            engine.apply_move(index)?;
            let outcome = engine.evaluate_outcome();
            if outcome.is_terminal() {
                info!(%outcome, moves = engine.history.len(), "Replay reached end of game");
                return Ok(engine);
            }
            engine.advance_turn();
        }

        Ok(engine)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(PlayerSymbols::default())
    }
}
