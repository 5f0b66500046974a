//! Terminal tic-tac-toe.
//!
//! Two players share one terminal and take turns naming cells 1-9.
//!
//! # Architecture
//!
//! - **Engine**: board, turns and outcome ([`tictactoe_engine`])
//! - **Console**: prompts, input validation and board rendering
//! - **Session**: the play-again loop owning one engine and one console
//! - **Config**: player symbols from TOML and the command line
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use terminal_tictactoe::{Console, GameEngine, PlayerSymbols, Session};
//!
//! // First player takes the top row, then declines a rematch.
//! let input = Cursor::new("1\n4\n2\n5\n3\nN\n");
//! let console = Console::new(input, Vec::new());
//! let mut session = Session::new(GameEngine::new(PlayerSymbols::default()), console);
//!
//! let summary = session.run()?;
//! assert_eq!(*summary.first_wins(), 1);
//! # Ok::<(), terminal_tictactoe::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod session;

pub use cli::{Cli, DEFAULT_CONFIG};
pub use config::{ConfigError, GameConfig};
pub use console::{
    Console, ConsoleError, WELCOME, parse_cell, parse_yes_no, render_board, render_legend,
};
pub use session::{Session, SessionError, SessionSummary};

pub use tictactoe_engine::{
    Board, GameEngine, Move, MoveError, Outcome, Phase, Player, PlayerSymbols, Position, Square,
};
