//! Tests for the game loop.

mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{ScriptedPrompt, board};
use tictactoe_core::{
    Board, BoardError, Coord, Game, GameError, GameEvent, GameResult, GameState, HumanPlayer,
    MinimaxPlayer, MoveSource, Player, PlayerError, PlayerKind, RandomPlayer,
};

/// Move source that always answers the same cell.
struct Stubborn(Coord);

impl MoveSource for Stubborn {
    fn decide(&mut self, _board: &Board) -> Result<Coord, PlayerError> {
        Ok(self.0)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Easy
    }
}

/// Move source that always answers the same cell and counts its calls.
struct Counting {
    cell: Coord,
    calls: Rc<Cell<u32>>,
}

impl MoveSource for Counting {
    fn decide(&mut self, _board: &Board) -> Result<Coord, PlayerError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.cell)
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Medium
    }
}

/// Move source that must never be consulted.
struct Untouchable;

impl MoveSource for Untouchable {
    fn decide(&mut self, board: &Board) -> Result<Coord, PlayerError> {
        panic!("asked to move on {}", board.serialize());
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Hard
    }
}

fn coord(col: i64, row: i64) -> Coord {
    Coord::new(col, row).unwrap()
}

#[test]
fn test_events_of_a_computer_game() {
    let mut game = Game::new(Box::new(MinimaxPlayer::new()), Box::new(MinimaxPlayer::new()));
    let mut events = Vec::new();
    let result = game.run(|event| events.push(event.clone())).unwrap();

    assert_eq!(result, GameResult::Draw);
    assert_eq!(events.len(), 19);
    assert_eq!(events.last(), Some(&GameEvent::Finished(GameResult::Draw)));

    for (i, pair) in events[..18].chunks(2).enumerate() {
        let expected = if i % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(
            pair[0],
            GameEvent::Thinking {
                player: expected,
                kind: PlayerKind::Hard
            }
        );
        let GameEvent::MoveMade { player, board, .. } = &pair[1] else {
            panic!("expected a move, got {:?}", pair[1]);
        };
        assert_eq!(*player, expected);
        assert_eq!(board.empty_cells().count(), 8 - i);
    }
    assert!(game.board().is_full());
}

#[test]
fn test_lifecycle() {
    let mut game = Game::new(Box::new(RandomPlayer::seeded(1)), Box::new(RandomPlayer::seeded(2)));
    assert_eq!(game.state(), GameState::NotStarted);

    let mut ignore = |_: &GameEvent| {};
    assert_eq!(game.step(&mut ignore).unwrap(), GameState::InProgress);
    assert_eq!(game.board().empty_cells().count(), 8);

    let result = game.run(ignore).unwrap();
    assert!(result.is_terminal());
    assert_eq!(game.state(), GameState::Finished(result));

    let before = *game.board();
    assert_eq!(game.step(&mut ignore).unwrap(), GameState::Finished(result));
    assert_eq!(*game.board(), before);
}

#[test]
fn test_terminal_board_finishes_without_moves() {
    let mut game = Game::from_board(
        board("XXXOO____"),
        Box::new(Untouchable),
        Box::new(Untouchable),
    );
    let mut events = Vec::new();
    let result = game.run(|event| events.push(event.clone())).unwrap();
    assert_eq!(result, GameResult::Won(Player::X));
    assert_eq!(events, vec![GameEvent::Finished(GameResult::Won(Player::X))]);
}

#[test]
fn test_invalid_board_finishes_as_impossible() {
    let mut game = Game::from_board(board("OO_______"), Box::new(Untouchable), Box::new(Untouchable));
    let result = game.run(|_| {}).unwrap();
    assert_eq!(result, GameResult::Invalid);
    assert_eq!(result.to_string(), "Impossible");
}

#[test]
fn test_continues_from_given_board() {
    // O to move and must block the top row.
    let mut game = Game::from_board(
        board("XX__O____"),
        Box::new(MinimaxPlayer::new()),
        Box::new(MinimaxPlayer::new()),
    );
    game.step(&mut |_| {}).unwrap();
    assert_eq!(game.board().serialize(), "XXO_O____");
}

#[test]
fn test_illegal_engine_move_aborts() {
    let mut game = Game::new(Box::new(Stubborn(coord(1, 1))), Box::new(Stubborn(coord(1, 1))));
    let mut ignore = |_: &GameEvent| {};
    game.step(&mut ignore).unwrap();

    let err = game.step(&mut ignore).unwrap_err();
    match err {
        GameError::IllegalEngineMove {
            player,
            kind,
            error,
        } => {
            assert_eq!(player, Player::O);
            assert_eq!(kind, PlayerKind::Easy);
            assert_eq!(error, BoardError::CellOccupied(coord(1, 1)));
        }
        other => panic!("unexpected error {other}"),
    }
    assert_eq!(game.board().serialize(), "______X__");
}

#[test]
fn test_closed_input_ends_game_with_player_error() {
    let human = HumanPlayer::new(ScriptedPrompt::new(&[]));
    let mut game = Game::new(Box::new(human), Box::new(MinimaxPlayer::new()));
    let err = game.run(|_| {}).unwrap_err();
    assert!(matches!(
        err,
        GameError::Player {
            player: Player::X,
            kind: PlayerKind::Human,
            error: PlayerError::InputClosed,
        }
    ));
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_scripted_human_completes_a_game() {
    // Offering every cell in order always leaves an empty one ahead.
    let cells = ["1 3", "2 3", "3 3", "1 2", "2 2", "3 2", "1 1", "2 1", "3 1"];
    let human = HumanPlayer::new(ScriptedPrompt::new(&cells));
    let mut game = Game::new(Box::new(human), Box::new(RandomPlayer::seeded(8)));

    let mut thinking = 0;
    let result = game
        .run(|event| {
            if matches!(event, GameEvent::Thinking { .. }) {
                thinking += 1;
            }
        })
        .unwrap();
    assert!(result.is_terminal());
    assert_ne!(result, GameResult::Invalid);
    assert!(thinking >= 2);
}

#[test]
fn test_aborted_game_stays_aborted() {
    let calls = Rc::new(Cell::new(0));
    let source = || Counting {
        cell: coord(1, 1),
        calls: Rc::clone(&calls),
    };
    let mut game = Game::new(Box::new(source()), Box::new(source()));
    let mut ignore = |_: &GameEvent| {};

    game.step(&mut ignore).unwrap();
    assert!(matches!(
        game.step(&mut ignore),
        Err(GameError::IllegalEngineMove { player: Player::O, .. })
    ));
    let aborted = GameState::Aborted {
        player: Player::O,
        kind: PlayerKind::Medium,
    };
    assert_eq!(game.state(), aborted);
    assert_eq!(calls.get(), 2);

    for _ in 0..3 {
        assert!(matches!(
            game.step(&mut ignore),
            Err(GameError::Aborted {
                player: Player::O,
                kind: PlayerKind::Medium,
            })
        ));
    }
    assert!(matches!(game.run(ignore), Err(GameError::Aborted { .. })));
    assert_eq!(calls.get(), 2);
    assert_eq!(game.state(), aborted);
    assert_eq!(game.board().serialize(), "______X__");
}

#[test]
fn test_player_failure_aborts_game() {
    let human = HumanPlayer::new(ScriptedPrompt::new(&[]));
    let mut game = Game::new(Box::new(human), Box::new(Untouchable));
    let mut ignore = |_: &GameEvent| {};

    assert!(matches!(
        game.step(&mut ignore),
        Err(GameError::Player { .. })
    ));
    assert_eq!(
        game.state(),
        GameState::Aborted {
            player: Player::X,
            kind: PlayerKind::Human,
        }
    );

    let err = game.step(&mut ignore).unwrap_err();
    assert_eq!(err.to_string(), "Game was aborted after human player X failed");
    assert_eq!(game.board(), &Board::new());
}
