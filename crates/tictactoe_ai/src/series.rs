//! Headless computer-versus-computer series.

use crate::session::Seeder;
use serde::Serialize;
use std::fmt;
use tictactoe_core::{Game, GameResult, Player, PlayerKind};
use tracing::{debug, info, instrument};

/// Tally of a finished series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesReport {
    /// Player for X.
    pub x: PlayerKind,
    /// Player for O.
    pub o: PlayerKind,
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl SeriesReport {
    fn new(x: PlayerKind, o: PlayerKind) -> Self {
        Self {
            x,
            o,
            games: 0,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        }
    }

    fn record(&mut self, result: GameResult) -> anyhow::Result<()> {
        match result {
            GameResult::Won(Player::X) => self.x_wins += 1,
            GameResult::Won(Player::O) => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::Ongoing | GameResult::Invalid => {
                anyhow::bail!("Game ended without a decision: {result}")
            }
        }
        self.games += 1;
        Ok(())
    }
}

impl fmt::Display for SeriesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (X) vs {} (O), {} games", self.x, self.o, self.games)?;
        writeln!(f, "X wins: {}", self.x_wins)?;
        writeln!(f, "O wins: {}", self.o_wins)?;
        write!(f, "Draws: {}", self.draws)
    }
}

/// Plays `games` games between two computer players.
///
/// # Errors
///
/// Refuses human players, and fails if any game aborts.
#[instrument(skip(seeder))]
pub fn run_series(
    seeder: &mut Seeder,
    x: PlayerKind,
    o: PlayerKind,
    games: u32,
) -> anyhow::Result<SeriesReport> {
    if !x.is_computer() || !o.is_computer() {
        anyhow::bail!("A series needs two computer players, got {x} and {o}");
    }

    let mut report = SeriesReport::new(x, o);
    for game_number in 1..=games {
        let mut game = Game::new(seeder.player(x), seeder.player(o));
        let result = game.run(|_| {})?;
        debug!(game_number, %result, "Series game finished");
        report.record(result)?;
    }

    info!(report.x_wins, report.o_wins, report.draws, "Series finished");
    Ok(report)
}
