//! Wiring player kinds to move sources and playing one game.

use crate::{ConsolePrompt, Renderer};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io;
use tictactoe_core::{Board, Game, GameResult, HumanPlayer, MoveSource, PlayerKind};
use tracing::{debug, info, instrument};

/// Hands out independent random generators for computer players.
///
/// With a seed every game of a session is reproducible; without one the
/// generators come from system entropy.
#[derive(Debug, Clone)]
pub struct Seeder {
    master: StdRng,
}

impl Seeder {
    /// Creates a seeder, seeded when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        let master = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { master }
    }

    /// Next generator, derived from the master stream.
    pub fn child(&mut self) -> StdRng {
        StdRng::seed_from_u64(self.master.next_u64())
    }

    /// Builds a player of `kind`; humans play at the console.
    #[instrument(skip(self))]
    pub fn player(&mut self, kind: PlayerKind) -> Box<dyn MoveSource> {
        let rng = self.child();
        match kind.computer(rng) {
            Some(computer) => computer,
            None => Box::new(HumanPlayer::new(ConsolePrompt)),
        }
    }
}

/// Plays one game from `board` on the console and returns its result.
///
/// The starting board, every board after a move and the result are drawn on
/// stdout.
///
/// # Errors
///
/// Fails with a [`GameError`](tictactoe_core::GameError) when a player cannot
/// move or moves illegally, or with an I/O error when stdout is gone.
#[instrument(skip(seeder, board), fields(board = %board.serialize()))]
pub fn play(
    seeder: &mut Seeder,
    x: PlayerKind,
    o: PlayerKind,
    board: Board,
) -> anyhow::Result<GameResult> {
    info!("Starting console game");
    let mut renderer = Renderer::new(io::stdout());
    renderer.board(&board);

    let mut game = Game::from_board(board, seeder.player(x), seeder.player(o));
    let result = game.run(|event| renderer.event(event));
    renderer.finish()?;

    let result = result?;
    debug!(%result, "Console game over");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_children_repeat() {
        let mut a = Seeder::new(Some(4));
        let mut b = Seeder::new(Some(4));
        assert_eq!(a.child().next_u64(), b.child().next_u64());
        assert_eq!(a.child().next_u64(), b.child().next_u64());
    }

    #[test]
    fn test_children_differ() {
        let mut seeder = Seeder::new(Some(4));
        assert_ne!(seeder.child().next_u64(), seeder.child().next_u64());
    }

    #[test]
    fn test_player_kinds() {
        let mut seeder = Seeder::new(Some(0));
        assert_eq!(seeder.player(PlayerKind::Hard).kind(), PlayerKind::Hard);
        assert_eq!(seeder.player(PlayerKind::Human).kind(), PlayerKind::Human);
    }
}
