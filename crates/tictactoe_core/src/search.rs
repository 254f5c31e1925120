//! Exhaustive minimax search.
//!
//! The tree below any tic-tac-toe position has at most 9! leaves, so it is
//! explored completely without pruning. Every node is a copy of its parent
//! board with one more mark; the caller's board is never touched.
//!
//! Leaves are scored from the root mover's point of view: a win is worth
//! `empty + 1`, a loss `-(empty + 1)` and a draw `0`, where `empty` is the
//! number of empty cells left on the leaf. Quicker wins therefore outscore
//! slower ones and slower losses outscore quicker ones.

use crate::rules::evaluate;
use crate::{Board, Coord, GameResult, Player, SearchError};
use tracing::{debug, instrument};

/// Move chosen by [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct SearchOutcome {
    /// Best move for the side to move; first in scan order among equals.
    pub best: Coord,
    /// Depth-weighted minimax score of `best`.
    pub score: i32,
    /// Number of positions visited.
    pub nodes: u64,
}

/// Finds the optimal move for the side to move.
///
/// # Errors
///
/// Returns [`SearchError::NotOngoing`] when the board is already won, drawn
/// or invalid.
#[instrument(skip(board), fields(board = %board.serialize()))]
pub fn search(board: &Board) -> Result<SearchOutcome, SearchError> {
    let result = evaluate(board);
    if result != GameResult::Ongoing {
        return Err(SearchError::NotOngoing(result));
    }

    let me = board.turn();
    let mut nodes = 1;
    let mut best: Option<(Coord, i32)> = None;

    for (coord, next) in board.successors(me) {
        let score = minimax(&next, me, &mut nodes);
        debug!(%coord, score, "Scored candidate");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((coord, score));
        }
    }

    let (coord, score) = best.ok_or(SearchError::NotOngoing(result))?;
    debug!(%coord, score, nodes, "Search complete");
    Ok(SearchOutcome::new(coord, score, nodes))
}

/// Scores `board` for `root`, maximising on `root`'s turns and minimising on
/// the opponent's.
fn minimax(board: &Board, root: Player, nodes: &mut u64) -> i32 {
    *nodes += 1;
    match evaluate(board) {
        GameResult::Won(winner) => {
            let weight = board.empty_cells().count() as i32 + 1;
            if winner == root { weight } else { -weight }
        }
        // Invalid cannot arise from legal placements on an ongoing board.
        GameResult::Draw | GameResult::Invalid => 0,
        GameResult::Ongoing => {
            let mover = board.turn();
            let scores = board
                .successors(mover)
                .map(|(_, next)| minimax(&next, root, nodes));
            let best = if mover == root {
                scores.max()
            } else {
                scores.min()
            };
            best.unwrap_or(0)
        }
    }
}
