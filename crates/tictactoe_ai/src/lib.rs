//! Console front end for tictactoe_core.
//!
//! Provides the pieces the `tictactoe_ai` binary is assembled from:
//!
//! - **Configuration**: [`AppConfig`] from an optional TOML file
//! - **Console**: [`ConsolePrompt`] for human players, [`Renderer`] for boards
//! - **Sessions**: [`Seeder`] and [`play`] for one game at the console
//! - **Commands**: the `start`/`help`/`exit` loop in [`run_repl`]
//! - **Series**: headless tallies with [`run_series`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod repl;
mod series;
mod session;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, ConfigProblem};

// Crate-level exports - Console I/O
pub use console::{ConsolePrompt, Renderer};

// Crate-level exports - Sessions
pub use repl::{BadParameters, HELP, ReplCommand, run_repl};
pub use series::{SeriesReport, run_series};
pub use session::{Seeder, play};
