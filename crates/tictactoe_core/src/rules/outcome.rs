//! Board classification.

use super::lines::has_complete_line;
use crate::{Board, GameResult, Player};

/// Classifies a board.
///
/// Mark counts are checked first: X must have as many marks as O or one
/// more. Then both sides' lines are collected; both complete is `Invalid`,
/// one complete is a win. Otherwise the board is `Ongoing` while any cell
/// is empty and a `Draw` once it is full.
pub fn evaluate(board: &Board) -> GameResult {
    let x = board.count(Player::X);
    let o = board.count(Player::O);
    if x < o || x - o > 1 {
        return GameResult::Invalid;
    }

    match (
        has_complete_line(board, Player::X),
        has_complete_line(board, Player::O),
    ) {
        (true, true) => GameResult::Invalid,
        (true, false) => GameResult::Won(Player::X),
        (false, true) => GameResult::Won(Player::O),
        (false, false) if board.is_full() => GameResult::Draw,
        (false, false) => GameResult::Ongoing,
    }
}
