//! Line-oriented terminal I/O for the game.
//!
//! The console prompts for moves and replay answers, re-prompting until the
//! answer is acceptable, and renders boards and results. It is generic over
//! its reader and writer so sessions can be scripted in tests.

mod input;
mod render;

pub use input::{parse_cell, parse_yes_no};
pub use render::{WELCOME, render_board, render_legend};

use derive_more::{Display, Error};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tictactoe_engine::{GameEngine, Outcome};
use tracing::{debug, instrument, trace, warn};

const CELL_QUESTION: &str = "Which cell would you like to select? (1-9): ";
const REPLAY_QUESTION: &str = "Would you like to play another game? (Y/N): ";

/// Error raised by console I/O.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O failed: {}", _0)]
    Io(io::Error),

    /// The input stream closed while waiting for an answer.
    #[display("Input ended while waiting for an answer")]
    EndOfInput,
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

/// Terminal front end for one player pair.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prints the greeting and the cell numbering.
    pub fn show_instructions(&mut self) -> Result<(), ConsoleError> {
        write!(self.output, "{}{}", WELCOME, render_legend())?;
        Ok(())
    }

    /// Prints the current board.
    pub fn show_board(&mut self, engine: &GameEngine) -> Result<(), ConsoleError> {
        write!(self.output, "{}", render_board(engine.board(), engine.symbols()))?;
        Ok(())
    }

    /// Asks the active player for a cell until an open one is named.
    ///
    /// Returns the 0-based index.
    #[instrument(skip(self, engine), fields(player = %engine.active_player()))]
    pub fn request_move(&mut self, engine: &GameEngine) -> Result<usize, ConsoleError> {
        let mut prompt = format!(
            "{}'s turn. {}",
            engine.symbol(engine.active_player()),
            CELL_QUESTION
        );

        loop {
            let answer = self.ask(&prompt)?;
            match parse_cell(&answer).filter(|index| engine.is_cell_open(*index)) {
                Some(index) => {
                    debug!(index, "Cell selected");
                    return Ok(index);
                }
                None => {
                    debug!(%answer, "Rejected cell answer");
                    prompt = format!("Not a valid cell. {}", CELL_QUESTION);
                }
            }
        }
    }

    /// Prints the result of a finished game followed by the final board.
    pub fn announce(&mut self, engine: &GameEngine, outcome: Outcome) -> Result<(), ConsoleError> {
        match outcome {
            Outcome::Win(player) => writeln!(self.output, "{} is the winner!", engine.symbol(player))?,
            Outcome::Tie => writeln!(self.output, "The game ends in a tie.")?,
            Outcome::InProgress => {
                warn!("Asked to announce a game that is still in progress");
                return Ok(());
            }
        }
        self.show_board(engine)
    }

    /// Asks whether to play again until a Y/N answer is given.
    #[instrument(skip(self))]
    pub fn ask_for_new_game(&mut self) -> Result<bool, ConsoleError> {
        let mut prompt = REPLAY_QUESTION.to_string();

        loop {
            let answer = self.ask(&prompt)?;
            if let Some(again) = parse_yes_no(&answer) {
                debug!(again, "Replay answer");
                return Ok(again);
            }
            debug!(%answer, "Rejected replay answer");
            prompt = format!("Not a valid choice. {}", REPLAY_QUESTION);
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }

        // Undecodable bytes become U+FFFD, which no parser accepts.
        let line = String::from_utf8(buf).unwrap_or_else(|e| {
            debug!(error = %e, "Answer is not valid UTF-8");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        });
        trace!(line = %line.escape_debug(), "Read answer");
        Ok(input::trim_line_ending(&line).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    fn started() -> GameEngine {
        let mut engine = GameEngine::default();
        engine.reset();
        engine
    }

    #[test]
    fn test_request_move_returns_index() {
        let mut console = scripted("5\n");
        assert_eq!(console.request_move(&started()).unwrap(), 4);
        assert_eq!(
            transcript(console),
            "X's turn. Which cell would you like to select? (1-9): "
        );
    }

    #[test]
    fn test_request_move_reprompts() {
        let mut engine = started();
        engine.apply_move(0).unwrap();
        engine.advance_turn();

        let mut console = scripted("1\nabc\n0\n2\n");
        assert_eq!(console.request_move(&engine).unwrap(), 1);
        let invalid = "Not a valid cell. Which cell would you like to select? (1-9): ";
        assert_eq!(
            transcript(console),
            format!(
                "O's turn. Which cell would you like to select? (1-9): {}",
                invalid.repeat(3)
            )
        );
    }

    #[test]
    fn test_request_move_end_of_input() {
        let mut console = scripted("");
        assert!(matches!(
            console.request_move(&started()),
            Err(ConsoleError::EndOfInput)
        ));
    }

    #[test]
    fn test_ask_for_new_game() {
        let mut console = scripted("maybe\ny\n");
        assert!(console.ask_for_new_game().unwrap());
        assert_eq!(
            transcript(console),
            "Would you like to play another game? (Y/N): \
             Not a valid choice. Would you like to play another game? (Y/N): "
        );

        let mut console = scripted("N\r\n");
        assert!(!console.ask_for_new_game().unwrap());
    }

    #[test]
    fn test_request_move_reprompts_on_undecodable_input() {
        let mut script = vec![0xff, b'\n', b'5', 0xfe, b'\n'];
        script.extend_from_slice(b"5\n");
        let mut console = Console::new(Cursor::new(script), Vec::new());

        assert_eq!(console.request_move(&started()).unwrap(), 4);
        let invalid = "Not a valid cell. Which cell would you like to select? (1-9): ";
        assert_eq!(transcript(console).matches(invalid).count(), 2);
    }

    #[test]
    fn test_ask_for_new_game_reprompts_on_undecodable_input() {
        let mut console = Console::new(Cursor::new(b"\xc3\nN\n".to_vec()), Vec::new());
        assert!(!console.ask_for_new_game().unwrap());
        assert!(transcript(console).contains("Not a valid choice. "));
    }

    #[test]
    fn test_announce_in_progress_prints_nothing() {
        let mut console = scripted("");
        console.announce(&started(), Outcome::InProgress).unwrap();
        assert!(transcript(console).is_empty());
    }

    #[test]
    fn test_announce_tie() {
        let engine = GameEngine::replay(
            tictactoe_engine::PlayerSymbols::default(),
            &[0, 4, 8, 1, 7, 6, 2, 5, 3],
        )
        .unwrap();
        let mut console = scripted("");
        console.announce(&engine, engine.evaluate_outcome()).unwrap();
        assert_eq!(
            transcript(console),
            "The game ends in a tie.\n|X|O|X|\n|X|O|O|\n|O|X|X|\n\n"
        );
    }
}
