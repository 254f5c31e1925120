//! Turn loop driving two move sources over one board.

use crate::rules::evaluate;
use crate::{Board, Coord, GameError, GameResult, MoveSource, Player, PlayerKind};
use tracing::{debug, error, info, instrument, warn};

/// Lifecycle of a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No move has been requested yet.
    NotStarted,
    /// Moves are being requested.
    InProgress,
    /// The board reached a terminal result.
    Finished(GameResult),
    /// A player failed or moved illegally; no further move is requested.
    Aborted {
        /// Side whose source failed.
        player: Player,
        /// Kind of the failing source.
        kind: PlayerKind,
    },
}

/// Messages sent from the game loop to its observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A computer player is about to choose its move.
    Thinking {
        /// Side to move.
        player: Player,
        /// Level of the computer player.
        kind: PlayerKind,
    },
    /// A mark was placed.
    MoveMade {
        /// Side that moved.
        player: Player,
        /// Cell that was marked.
        coord: Coord,
        /// Board after the move.
        board: Board,
    },
    /// The game ended.
    Finished(GameResult),
}

/// One match: a board and a move source per side.
///
/// The board is only changed here, one placement per turn, and the side to
/// move is always read back from it.
pub struct Game {
    board: Board,
    player_x: Box<dyn MoveSource>,
    player_o: Box<dyn MoveSource>,
    state: GameState,
}

impl Game {
    /// Creates a game on an empty board.
    pub fn new(player_x: Box<dyn MoveSource>, player_o: Box<dyn MoveSource>) -> Self {
        Self::from_board(Board::new(), player_x, player_o)
    }

    /// Creates a game continuing from `board`.
    ///
    /// If `board` is already terminal (or invalid) the first step finishes
    /// the game without asking either player.
    #[instrument(skip(player_x, player_o))]
    pub fn from_board(
        board: Board,
        player_x: Box<dyn MoveSource>,
        player_o: Box<dyn MoveSource>,
    ) -> Self {
        Self {
            board,
            player_x,
            player_o,
            state: GameState::NotStarted,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Plays one turn and returns the new state.
    ///
    /// A finished game is left as is.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalEngineMove`] if the player returned a cell the
    /// board refuses, [`GameError::Player`] if it could not move. Either way
    /// the game moves to [`GameState::Aborted`] with the board at its last
    /// legal position, and every later step fails with
    /// [`GameError::Aborted`] without consulting a player.
    #[instrument(skip(self, on_event), fields(board = %self.board.serialize()))]
    pub fn step(&mut self, on_event: &mut dyn FnMut(&GameEvent)) -> Result<GameState, GameError> {
        match self.state {
            GameState::Finished(_) => return Ok(self.state),
            GameState::Aborted { player, kind } => {
                return Err(GameError::Aborted { player, kind });
            }
            GameState::NotStarted => {
                info!("Starting game");
                self.state = GameState::InProgress;
                if self.settle(on_event) {
                    return Ok(self.state);
                }
            }
            GameState::InProgress => {}
        }

        let player = self.board.turn();
        let source = match player {
            Player::X => &mut self.player_x,
            Player::O => &mut self.player_o,
        };
        let kind = source.kind();

        if kind.is_computer() {
            on_event(&GameEvent::Thinking { player, kind });
        }

        let coord = match source.decide(&self.board) {
            Ok(coord) => coord,
            Err(error) => {
                warn!(%player, %kind, %error, "Player failed to move, aborting game");
                self.state = GameState::Aborted { player, kind };
                return Err(GameError::Player {
                    player,
                    kind,
                    error,
                });
            }
        };

        if let Err(error) = self.board.place(coord, player) {
            error!(%player, %kind, %coord, %error, "Player returned an illegal move");
            self.state = GameState::Aborted { player, kind };
            return Err(GameError::IllegalEngineMove {
                player,
                kind,
                error,
            });
        }
        debug!(%player, %kind, %coord, "Move applied");

        on_event(&GameEvent::MoveMade {
            player,
            coord,
            board: self.board,
        });
        self.settle(on_event);

        Ok(self.state)
    }

    /// Plays turns until the game finishes.
    pub fn run(&mut self, mut on_event: impl FnMut(&GameEvent)) -> Result<GameResult, GameError> {
        loop {
            if let GameState::Finished(result) = self.step(&mut on_event)? {
                return Ok(result);
            }
        }
    }

    /// Finishes the game if the board is terminal. Returns true if it did.
    fn settle(&mut self, on_event: &mut dyn FnMut(&GameEvent)) -> bool {
        let result = evaluate(&self.board);
        if !result.is_terminal() {
            return false;
        }
        info!(%result, "Game finished");
        self.state = GameState::Finished(result);
        on_event(&GameEvent::Finished(result));
        true
    }
}
