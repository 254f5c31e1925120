//! Tic-tac-toe AI - console game
//!
//! Plays tic-tac-toe between humans and computer players on the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_ai::{AppConfig, Seeder, play, run_repl, run_series};
use tictactoe_core::{Board, PlayerKind, evaluate};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?.with_seed(cli.seed);
    initialize_tracing(config.log_filter());

    let mut seeder = Seeder::new(*config.seed());

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => run_repl(&mut seeder),
        Command::Play { x, o, board } => run_play(&mut seeder, x, o, board),
        Command::Evaluate { board } => run_evaluate(&board),
        Command::Series { x, o, games, json } => {
            let games = games.unwrap_or(*config.series_games());
            let report = run_series(&mut seeder, x, o, games)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
            Ok(())
        }
    }
}

/// Play one game, optionally from a given board
#[instrument(skip(seeder))]
fn run_play(
    seeder: &mut Seeder,
    x: PlayerKind,
    o: PlayerKind,
    board: Option<String>,
) -> Result<()> {
    let board = match board {
        Some(text) => parse_board(&text)?,
        None => Board::new(),
    };
    play(seeder, x, o, board)?;
    Ok(())
}

/// Print a board and its state
#[instrument]
fn run_evaluate(text: &str) -> Result<()> {
    let board = parse_board(text)?;
    println!("{board}");
    println!("{}", evaluate(&board));
    Ok(())
}

fn parse_board(text: &str) -> Result<Board> {
    text.parse::<Board>()
        .with_context(|| format!("Invalid board {text:?}"))
}

/// Logs go to stderr; stdout belongs to the game.
fn initialize_tracing(fallback_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
