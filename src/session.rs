//! Session loop: plays games until the players decline a rematch.

use crate::console::{Console, ConsoleError};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
#[cfg(debug_assertions)]
use tictactoe_engine::invariants::{InvariantSet, TicTacToeInvariants};
use tictactoe_engine::{GameEngine, MoveError, Outcome, Player};
use tracing::{debug, error, info, instrument};

/// Error that ends a session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Terminal I/O failed.
    #[display("{}", _0)]
    Console(ConsoleError),

    /// The engine rejected a move the console had already validated.
    #[display("Engine rejected a validated move: {}", _0)]
    Move(MoveError),
}

/// Tally of a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Games that reached a win or a tie.
    games_played: u32,
    /// Games won by the first mover.
    first_wins: u32,
    /// Games won by the second mover.
    second_wins: u32,
    /// Games that ended in a tie.
    ties: u32,
    /// True if the session ended because input closed.
    input_closed: bool,
}

impl SessionSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::First) => self.first_wins += 1,
            Outcome::Win(Player::Second) => self.second_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => return,
        }
        self.games_played += 1;
    }
}

/// Owns the engine and the console for the length of a session.
#[derive(Debug)]
pub struct Session<R, W> {
    engine: GameEngine,
    console: Console<R, W>,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over an engine and a console.
    pub fn new(engine: GameEngine, console: Console<R, W>) -> Self {
        Self {
            engine,
            console,
            summary: SessionSummary::default(),
        }
    }

    /// Plays games until the players decline another one or input closes.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionSummary, SessionError> {
        info!("Session started");

        loop {
            match self.play_game() {
                Ok(outcome) => self.summary.record(outcome),
                Err(SessionError::Console(ConsoleError::EndOfInput)) => {
                    info!("Input closed during a game");
                    self.summary.input_closed = true;
                    break;
                }
                Err(e) => return Err(e),
            }

            match self.console.ask_for_new_game() {
                Ok(true) => debug!("Starting another game"),
                Ok(false) => break,
                Err(ConsoleError::EndOfInput) => {
                    info!("Input closed at the replay prompt");
                    self.summary.input_closed = true;
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!(
            games = self.summary.games_played,
            first_wins = self.summary.first_wins,
            second_wins = self.summary.second_wins,
            ties = self.summary.ties,
            "Session finished"
        );
        Ok(self.summary.clone())
    }

    /// Plays one game from a fresh board to a win or a tie.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<Outcome, SessionError> {
        self.engine.reset();
        self.console.show_instructions()?;

        loop {
            self.console.show_board(&self.engine)?;
            let index = self.console.request_move(&self.engine)?;
            let action = self.engine.apply_move(index).inspect_err(|e| {
                error!(error = %e, index, "Engine rejected a validated move");
            })?;
            debug!(%action, "Move accepted");

            let outcome = self.engine.evaluate_outcome();
            if outcome.is_terminal() {
                info!(%outcome, moves = self.engine.history().len(), "Game over");
                self.console.announce(&self.engine, outcome)?;
                return Ok(outcome);
            }

            self.engine.advance_turn();

            #[cfg(debug_assertions)]
            TicTacToeInvariants::check_all(&self.engine).map_err(|violations| {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                error!(%descriptions, "Invariant violated after move");
                MoveError::InvariantViolation(descriptions)
            })?;
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consumes the session, returning its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
