//! The menu of player kinds offered by the command surface.

use super::{HeuristicPlayer, MinimaxPlayer, MoveSource, RandomPlayer};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::instrument;

/// Kind of player for one side: a human or one of three computer levels.
///
/// Parses case-insensitively; `user` is accepted for `human`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Enters coordinates at a prompt.
    #[strum(to_string = "human", serialize = "user")]
    #[serde(alias = "user")]
    Human,
    /// Random legal moves.
    Easy,
    /// Wins or blocks when it can, otherwise random.
    Medium,
    /// Exhaustive minimax; never loses.
    Hard,
}

impl PlayerKind {
    /// Returns true for the three computer levels.
    pub fn is_computer(self) -> bool {
        self != PlayerKind::Human
    }

    /// Builds the computer player of this kind, drawing randomness from `rng`.
    ///
    /// Returns `None` for [`PlayerKind::Human`], whose console belongs to the
    /// caller.
    #[instrument(skip(rng))]
    pub fn computer(self, rng: StdRng) -> Option<Box<dyn MoveSource>> {
        match self {
            PlayerKind::Human => None,
            PlayerKind::Easy => Some(Box::new(RandomPlayer::new(rng))),
            PlayerKind::Medium => Some(Box::new(HeuristicPlayer::new(rng))),
            PlayerKind::Hard => Some(Box::new(MinimaxPlayer::new())),
        }
    }
}
