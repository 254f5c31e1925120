//! The strongest level: full game-tree search.

use super::{MoveSource, PlayerKind};
use crate::search::search;
use crate::{Board, Coord, PlayerError};
use tracing::{debug, instrument};

/// Computer player ("hard") that plays the minimax-optimal move.
///
/// Deterministic: the same board always yields the same move.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxPlayer;

impl MinimaxPlayer {
    /// Creates a minimax player.
    pub fn new() -> Self {
        Self
    }
}

impl MoveSource for MinimaxPlayer {
    #[instrument(skip_all)]
    fn decide(&mut self, board: &Board) -> Result<Coord, PlayerError> {
        let outcome = search(board)?;
        debug!(
            coord = %outcome.best,
            score = outcome.score,
            nodes = outcome.nodes,
            "Minimax move"
        );
        Ok(outcome.best)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Hard
    }
}
