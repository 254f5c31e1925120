//! The interactive command loop.

use crate::ConsolePrompt;
use crate::session::{Seeder, play};
use derive_more::{Display, Error};
use std::str::FromStr;
use tictactoe_core::{Board, GameError, PlayerKind, Prompt};
use tracing::{debug, error, info, instrument, warn};

/// Text shown for `help`.
pub const HELP: &str = "\
Commands:
  start <x> <o>  play a game; each side is user, easy, medium or hard
  help           show this message
  exit           quit";

/// A command typed at the `Input command:` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Play one game with the given players for X and O.
    Start {
        /// Player for X, who moves first.
        x: PlayerKind,
        /// Player for O.
        o: PlayerKind,
    },
    /// Show the command list.
    Help,
    /// Leave the loop.
    Exit,
}

/// Any line that is not a well-formed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Bad parameters!")]
pub struct BadParameters;

impl FromStr for ReplCommand {
    type Err = BadParameters;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["start", x, o] => Ok(ReplCommand::Start {
                x: x.parse().map_err(|_| BadParameters)?,
                o: o.parse().map_err(|_| BadParameters)?,
            }),
            ["help"] => Ok(ReplCommand::Help),
            ["exit"] => Ok(ReplCommand::Exit),
            _ => Err(BadParameters),
        }
    }
}

/// Reads commands until `exit` or end of input.
///
/// A game that aborts is reported and the loop carries on; console I/O
/// failures end the loop.
#[instrument(skip_all)]
pub fn run_repl(seeder: &mut Seeder) -> anyhow::Result<()> {
    let mut console = ConsolePrompt;
    loop {
        let Some(line) = console.ask("Input command: ")? else {
            info!("Input closed, leaving");
            return Ok(());
        };

        match line.parse::<ReplCommand>() {
            Ok(ReplCommand::Exit) => {
                debug!("Exit requested");
                return Ok(());
            }
            Ok(ReplCommand::Help) => console.tell(HELP)?,
            Ok(ReplCommand::Start { x, o }) => match play(seeder, x, o, Board::new()) {
                Ok(_) => {}
                Err(err) => match err.downcast_ref::<GameError>() {
                    Some(game_error) => {
                        error!(%game_error, "Game aborted");
                        console.tell(&format!("Game aborted: {game_error}"))?;
                    }
                    None => return Err(err),
                },
            },
            Err(bad) => {
                warn!(input = line.trim(), "Unrecognised command");
                console.tell(&bad.to_string())?;
            }
        }
    }
}
