//! Core domain types for tic-tac-toe.

/// Side in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the symbol used for this player in board text.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Mark {
    /// Symbol for this mark in board text (`X`, `O` or `_`).
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::Occupied(player) => player.symbol(),
        }
    }

    /// Parses a board text symbol, ignoring case.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            '_' => Some(Mark::Empty),
            'X' => Some(Mark::Occupied(Player::X)),
            'O' => Some(Mark::Occupied(Player::O)),
            _ => None,
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(player) => Some(player),
        }
    }
}

/// Classification of a board.
///
/// `Invalid` covers boards no alternating game can produce: X and O counts
/// out of step, or both players holding three in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GameResult {
    /// Game is ongoing.
    #[display("Game not finished")]
    Ongoing,
    /// Game ended in a win.
    #[display("{_0} wins")]
    Won(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
    /// The board cannot arise from legal play.
    #[display("Impossible")]
    Invalid,
}

impl GameResult {
    /// Returns true unless the game is still ongoing.
    pub fn is_terminal(self) -> bool {
        self != GameResult::Ongoing
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Won(player) => Some(player),
            _ => None,
        }
    }
}
