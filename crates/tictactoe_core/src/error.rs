//! Error types for the board, move sources and the game loop.

use crate::{Coord, GameResult, Player, PlayerKind};
use derive_more::Display;

/// Error reading or changing a [`Board`](crate::Board).
///
/// These are recoverable: the board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// A coordinate lies outside `1..=3`.
    #[display("Coordinates ({col}, {row}) are outside 1..=3")]
    OutOfRange {
        /// Requested column.
        col: i64,
        /// Requested row.
        row: i64,
    },

    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Coord),

    /// Board text is not nine cells over `X`, `O` and `_`.
    #[display("Malformed board text: {_0}")]
    MalformedSerialization(String),
}

impl std::error::Error for BoardError {}

/// Error from the exhaustive search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SearchError {
    /// The board is already decided (or impossible), so there is no move to pick.
    #[display("Cannot search a board that is not ongoing ({_0})")]
    NotOngoing(GameResult),
}

impl std::error::Error for SearchError {}

/// Error from a [`MoveSource`](crate::MoveSource) while choosing a move.
#[derive(Debug, Display)]
pub enum PlayerError {
    /// Asked to move on a board with no empty cell.
    #[display("No empty cell left to play")]
    NoLegalMove,

    /// The human's input ended before valid coordinates arrived.
    #[display("Input closed before coordinates were entered")]
    InputClosed,

    /// Reading or writing the human's console failed.
    #[display("Console I/O failed: {_0}")]
    Io(std::io::Error),

    /// The search refused the board.
    #[display("{_0}")]
    Search(SearchError),
}

impl std::error::Error for PlayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayerError::Io(e) => Some(e),
            PlayerError::Search(e) => Some(e),
            PlayerError::NoLegalMove | PlayerError::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        PlayerError::Io(err)
    }
}

impl From<SearchError> for PlayerError {
    fn from(err: SearchError) -> Self {
        PlayerError::Search(err)
    }
}

/// Error that aborts a [`Game`](crate::Game).
#[derive(Debug, Display)]
pub enum GameError {
    /// A move source returned an occupied or out-of-range cell.
    ///
    /// Move sources validate their own output, so this is a bug in the source.
    #[display("{kind} player {player} returned an illegal move: {error}")]
    IllegalEngineMove {
        /// Side whose source misbehaved.
        player: Player,
        /// Kind of the misbehaving source.
        kind: PlayerKind,
        /// Why the board refused the move.
        error: BoardError,
    },

    /// A move source failed to produce a move at all.
    #[display("{kind} player {player} failed to move: {error}")]
    Player {
        /// Side whose source failed.
        player: Player,
        /// Kind of the failing source.
        kind: PlayerKind,
        /// Underlying failure.
        error: PlayerError,
    },

    /// The game was already aborted by an earlier failure.
    #[display("Game was aborted after {kind} player {player} failed")]
    Aborted {
        /// Side whose source failed.
        player: Player,
        /// Kind of the failing source.
        kind: PlayerKind,
    },
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IllegalEngineMove { error, .. } => Some(error),
            GameError::Player { error, .. } => Some(error),
            GameError::Aborted { .. } => None,
        }
    }
}
