//! Tic-tac-toe game engine.
//!
//! Board representation, win/tie detection and turn management for a
//! two-player game on a 3x3 grid. The engine does no I/O; callers render
//! the board and collect moves.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Outcome, Player, PlayerSymbols};
//!
//! let mut engine = GameEngine::new(PlayerSymbols::default());
//! engine.reset();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index)?;
//!     if engine.evaluate_outcome().is_terminal() {
//!         break;
//!     }
//!     engine.advance_turn();
//! }
//! assert_eq!(engine.evaluate_outcome(), Outcome::Win(Player::First));
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod phases;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use engine::GameEngine;
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use types::{Board, Player, PlayerSymbols, Square};
