//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The outcome evaluator is
//! exposed on its own so the computer opponents can test hypothetical boards.

mod lines;
mod outcome;

pub use lines::{has_complete_line, winning_move};
pub use outcome::evaluate;
