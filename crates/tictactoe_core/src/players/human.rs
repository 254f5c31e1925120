//! Human player that types coordinates at a prompt.

use super::{MoveSource, PlayerKind};
use crate::{Board, Coord, PlayerError};
use derive_more::Display;
use std::io;
use tracing::{debug, instrument};

/// Line-oriented conversation with a human.
///
/// The console implementation lives with the binary; tests script it.
pub trait Prompt {
    /// Shows `question` and reads one line of the answer.
    ///
    /// Returns `None` once the input is exhausted.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;

    /// Shows a message to the player.
    fn tell(&mut self, message: &str) -> io::Result<()>;
}

/// Why typed coordinates were refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The line was not two integers.
    #[display("You should enter numbers!")]
    NotNumbers,
    /// A number was outside `1..=3`.
    #[display("Coordinates should be from 1 to 3!")]
    OutOfRange,
    /// The cell already holds a mark.
    #[display("This cell is occupied! Choose another one!")]
    Occupied,
}

/// Parses a `"<col> <row>"` answer against `board`.
pub fn parse_coordinates(input: &str, board: &Board) -> Result<Coord, Rejection> {
    let numbers = input
        .split_whitespace()
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| Rejection::NotNumbers)?;

    let &[col, row] = numbers.as_slice() else {
        return Err(Rejection::NotNumbers);
    };

    let coord = Coord::new(col, row).map_err(|_| Rejection::OutOfRange)?;
    if !board.is_empty(coord) {
        return Err(Rejection::Occupied);
    }
    Ok(coord)
}

/// Human player: asks until the answer names an empty cell.
///
/// Every rejected answer is reported with its reason and the question is
/// asked again. Only end of input or an I/O failure ends the loop without a
/// move.
#[derive(Debug)]
pub struct HumanPlayer<P> {
    prompt: P,
}

impl<P: Prompt> HumanPlayer<P> {
    /// Creates a human player talking through `prompt`.
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    /// Returns the prompt, e.g. to inspect a scripted conversation.
    pub fn into_prompt(self) -> P {
        self.prompt
    }
}

impl<P: Prompt> MoveSource for HumanPlayer<P> {
    #[instrument(skip_all)]
    fn decide(&mut self, board: &Board) -> Result<Coord, PlayerError> {
        if board.is_full() {
            return Err(PlayerError::NoLegalMove);
        }

        loop {
            let Some(line) = self.prompt.ask("Enter the coordinates: ")? else {
                return Err(PlayerError::InputClosed);
            };

            match parse_coordinates(&line, board) {
                Ok(coord) => return Ok(coord),
                Err(rejection) => {
                    debug!(%rejection, input = line.trim(), "Coordinates rejected");
                    self.prompt.tell(&rejection.to_string())?;
                }
            }
        }
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}
