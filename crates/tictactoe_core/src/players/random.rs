//! Uniformly random legal moves.

use super::{MoveSource, PlayerKind};
use crate::{Board, Coord, PlayerError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Computer player that marks a uniformly random empty cell ("easy").
#[derive(Debug, Clone)]
pub struct RandomPlayer<R = StdRng> {
    rng: R,
}

impl RandomPlayer {
    /// Creates a random player with a reproducible seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a random player drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSource for RandomPlayer<R> {
    #[instrument(skip_all)]
    fn decide(&mut self, board: &Board) -> Result<Coord, PlayerError> {
        let coord = random_empty(board, &mut self.rng)?;
        debug!(%coord, "Random move");
        Ok(coord)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Easy
    }
}

/// Samples `(col, row)` pairs until one is empty.
///
/// Terminates with probability one whenever an empty cell exists; a full
/// board is refused up front.
pub(crate) fn random_empty<R: Rng>(board: &Board, rng: &mut R) -> Result<Coord, PlayerError> {
    if board.is_full() {
        return Err(PlayerError::NoLegalMove);
    }
    loop {
        let col = rng.gen_range(Coord::MIN..=Coord::MAX);
        let row = rng.gen_range(Coord::MIN..=Coord::MAX);
        if let Ok(coord) = Coord::new(col, row)
            && board.is_empty(coord)
        {
            return Ok(coord);
        }
    }
}
