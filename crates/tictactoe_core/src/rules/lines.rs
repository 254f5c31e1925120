//! Three-in-a-row detection.

use crate::{Board, Coord, Mark, Player};

/// The eight winning lines: rows, columns, diagonals.
const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::at(1, 3), Coord::at(2, 3), Coord::at(3, 3)],
    [Coord::at(1, 2), Coord::at(2, 2), Coord::at(3, 2)],
    [Coord::at(1, 1), Coord::at(2, 1), Coord::at(3, 1)],
    // Columns
    [Coord::at(1, 3), Coord::at(1, 2), Coord::at(1, 1)],
    [Coord::at(2, 3), Coord::at(2, 2), Coord::at(2, 1)],
    [Coord::at(3, 3), Coord::at(3, 2), Coord::at(3, 1)],
    // Diagonals
    [Coord::at(1, 3), Coord::at(2, 2), Coord::at(3, 1)],
    [Coord::at(3, 3), Coord::at(2, 2), Coord::at(1, 1)],
];

/// Returns true if `player` holds all three cells of any line.
pub fn has_complete_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&coord| board.get(coord) == Mark::Occupied(player)))
}

/// First empty cell, in scan order, that would complete a line for `player`.
///
/// Works for either side regardless of whose turn it is, which is what the
/// blocking check needs.
pub fn winning_move(board: &Board, player: Player) -> Option<Coord> {
    board
        .successors(player)
        .find(|(_, next)| has_complete_line(next, player))
        .map(|(coord, _)| coord)
}
