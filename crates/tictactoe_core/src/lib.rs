//! Tic-tac-toe rules and computer opponents.
//!
//! This crate holds everything about the game that does not touch a console:
//!
//! - **Board**: 3x3 cells addressed by [`Coord`], with the side to move
//!   derived from the mark counts
//! - **Rules**: [`evaluate`] classifies any board, including impossible ones
//! - **Players**: the [`MoveSource`] trait and its four implementations,
//!   from random moves to exhaustive [`search`]
//! - **Game**: [`Game`] alternates two players until the board is decided
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameResult, MinimaxPlayer};
//!
//! let mut game = Game::new(Box::new(MinimaxPlayer::new()), Box::new(MinimaxPlayer::new()));
//! let result = game.run(|_| {}).unwrap();
//! assert_eq!(result, GameResult::Draw);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coord;
mod error;
mod game;
mod players;
mod rules;
mod search;
mod types;

// Crate-level exports - Board and domain types
pub use board::Board;
pub use coord::Coord;
pub use types::{GameResult, Mark, Player};

// Crate-level exports - Errors
pub use error::{BoardError, GameError, PlayerError, SearchError};

// Crate-level exports - Rules and search
pub use rules::{evaluate, has_complete_line, winning_move};
pub use search::{SearchOutcome, search};

// Crate-level exports - Players
pub use players::{
    HeuristicPlayer, HumanPlayer, MinimaxPlayer, MoveSource, PlayerKind, Prompt, RandomPlayer,
    Rejection, parse_coordinates,
};

// Crate-level exports - Game loop
pub use game::{Game, GameEvent, GameState};
