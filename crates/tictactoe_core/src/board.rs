//! The 3x3 board and its text form.

use crate::{BoardError, Coord, Mark, Player};
use std::fmt;
use std::str::FromStr;
use tracing::{instrument, warn};

const CELLS: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells are addressed by [`Coord`]. [`Board::place`] is the only way to
/// change a cell, and whose turn it is follows from the mark counts instead
/// of being stored alongside them.
///
/// Board text is nine symbols (`X`, `O`, `_`) in [`Coord::ALL`] order, so
/// `"XO_______"` has X in the top-left and O next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Cells in scan order (see [`Coord::ALL`]).
    cells: [Mark; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELLS],
        }
    }

    /// Gets the mark at a coordinate.
    pub fn get(&self, coord: Coord) -> Mark {
        self.cells[coord.index()]
    }

    /// Gets the mark at `(col, row)`, rejecting values outside `1..=3`.
    pub fn cell(&self, col: i64, row: i64) -> Result<Mark, BoardError> {
        Ok(self.get(Coord::new(col, row)?))
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Mark::Empty
    }

    /// Places `player`'s mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellOccupied`] if the cell already holds a mark;
    /// the board is unchanged in that case.
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), BoardError> {
        let cell = &mut self.cells[coord.index()];
        if *cell != Mark::Empty {
            return Err(BoardError::CellOccupied(coord));
        }
        *cell = Mark::Occupied(player);
        Ok(())
    }

    /// Places `player`'s mark at `(col, row)`.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfRange`] for coordinates outside `1..=3`, otherwise
    /// as [`Board::place`].
    pub fn place_at(&mut self, col: i64, row: i64, player: Player) -> Result<(), BoardError> {
        self.place(Coord::new(col, row)?, player)
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&mark| mark == Mark::Occupied(player))
            .count()
    }

    /// Side to move: X whenever both sides have the same number of marks.
    pub fn turn(&self) -> Player {
        if self.count(Player::X) == self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Empty cells in scan order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::ALL.into_iter().filter(|&coord| self.is_empty(coord))
    }

    /// Checks if the board is full (all cells occupied).
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&mark| mark != Mark::Empty)
    }

    /// Every board reachable by `player` marking one empty cell, in scan
    /// order. `self` is not modified.
    pub fn successors(&self, player: Player) -> impl Iterator<Item = (Coord, Board)> + '_ {
        self.empty_cells().filter_map(move |coord| {
            let mut next = *self;
            next.place(coord, player).ok().map(|()| (coord, next))
        })
    }

    /// Encodes the board as nine uppercase symbols.
    pub fn serialize(&self) -> String {
        self.cells.iter().map(|mark| mark.symbol()).collect()
    }

    /// Decodes board text, falling back to an empty board.
    ///
    /// Malformed text never yields a partly filled board: the result is an
    /// empty board together with the validation error.
    #[instrument]
    pub fn deserialize(text: &str) -> (Self, Option<BoardError>) {
        match text.parse() {
            Ok(board) => (board, None),
            Err(error) => {
                warn!(%error, "Malformed board text, using an empty board");
                (Self::new(), Some(error))
            }
        }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = text.chars().collect();
        if symbols.len() != CELLS {
            return Err(BoardError::MalformedSerialization(format!(
                "expected {CELLS} cells, found {}",
                symbols.len()
            )));
        }

        let mut board = Self::new();
        for (coord, symbol) in Coord::ALL.into_iter().zip(symbols) {
            match Mark::from_symbol(symbol) {
                Some(Mark::Occupied(player)) => board.place(coord, player)?,
                Some(Mark::Empty) => {}
                None => {
                    return Err(BoardError::MalformedSerialization(format!(
                        "unexpected symbol {symbol:?} at {coord}"
                    )));
                }
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Draws the board framed by dashes, top row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------")?;
        for row in self.cells.chunks(3) {
            let symbols: Vec<String> = row
                .iter()
                .map(|mark| match mark {
                    Mark::Empty => " ".to_string(),
                    Mark::Occupied(player) => player.to_string(),
                })
                .collect();
            writeln!(f, "| {} |", symbols.join(" "))?;
        }
        write!(f, "---------")
    }
}
