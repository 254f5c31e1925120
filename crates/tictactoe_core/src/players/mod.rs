//! Move sources: everything that can choose the next cell to mark.

mod heuristic;
mod human;
mod kind;
mod minimax;
mod random;

pub use heuristic::HeuristicPlayer;
pub use human::{HumanPlayer, Prompt, Rejection, parse_coordinates};
pub use kind::PlayerKind;
pub use minimax::MinimaxPlayer;
pub use random::RandomPlayer;

use crate::{Board, Coord, PlayerError};

/// Anything that can choose a move for the side whose turn it is.
///
/// Implementations must only return empty, in-range cells. The game loop
/// treats anything else as a bug and aborts the game.
pub trait MoveSource {
    /// Chooses the cell to mark for [`Board::turn`] on `board`.
    fn decide(&mut self, board: &Board) -> Result<Coord, PlayerError>;

    /// Which kind of player this is.
    fn kind(&self) -> PlayerKind;
}
