//! Command-line interface for tictactoe_ai.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::PlayerKind;

/// Tic-tac-toe against humans or computer players of three levels
#[derive(Parser, Debug)]
#[command(name = "tictactoe_ai")]
#[command(about = "Console tic-tac-toe with easy, medium and hard computer players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Seed for the computer players' randomness (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run; the command loop when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Read `start`, `help` and `exit` commands from stdin
    Repl,

    /// Play one game
    Play {
        /// Player for X: user, easy, medium or hard
        x: PlayerKind,

        /// Player for O: user, easy, medium or hard
        o: PlayerKind,

        /// Starting board as nine cells of X, O and _, top row first
        #[arg(long)]
        board: Option<String>,
    },

    /// Print a board and its state
    Evaluate {
        /// Nine cells of X, O and _, top row first
        board: String,
    },

    /// Play a series between two computer players and print the tally
    Series {
        /// Player for X: easy, medium or hard
        x: PlayerKind,

        /// Player for O: easy, medium or hard
        o: PlayerKind,

        /// Number of games (defaults to the config's series_games)
        #[arg(short = 'n', long)]
        games: Option<u32>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },
}
