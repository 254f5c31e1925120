//! One-ply lookahead: win if possible, block if necessary.

use super::random::random_empty;
use super::{MoveSource, PlayerKind};
use crate::rules::winning_move;
use crate::{Board, Coord, PlayerError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Computer player ("medium") that looks one move ahead.
///
/// Takes a winning cell if it has one, otherwise blocks the opponent's
/// winning cell, otherwise plays randomly. Among several winning or blocking
/// cells the first in scan order is used.
#[derive(Debug, Clone)]
pub struct HeuristicPlayer<R = StdRng> {
    rng: R,
}

impl HeuristicPlayer {
    /// Creates a heuristic player with a reproducible seed for its random fallback.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> HeuristicPlayer<R> {
    /// Creates a heuristic player whose fallback draws from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSource for HeuristicPlayer<R> {
    #[instrument(skip_all, fields(board = %board.serialize()))]
    fn decide(&mut self, board: &Board) -> Result<Coord, PlayerError> {
        let me = board.turn();

        if let Some(coord) = winning_move(board, me) {
            debug!(%coord, "Taking winning move");
            return Ok(coord);
        }

        if let Some(coord) = winning_move(board, me.opponent()) {
            debug!(%coord, "Blocking opponent");
            return Ok(coord);
        }

        let coord = random_empty(board, &mut self.rng)?;
        debug!(%coord, "No win or block, random move");
        Ok(coord)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Medium
    }
}
