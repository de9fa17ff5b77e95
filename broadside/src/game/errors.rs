use thiserror::Error;

use crate::{board::ShotError, game::Side, player::PlayerError};

/// Reasons a game could not be started or a turn could not be played.
#[derive(Debug, Error)]
pub enum GameError {
    /// A player has no ships, so the game would be over before it began.
    #[error("the {0} player has no ships")]
    EmptyFleet(Side),

    /// The game already has a winner.
    #[error("the game is already over")]
    AlreadyOver,

    /// The active player failed to pick a target.
    #[error(transparent)]
    Player(#[from] PlayerError),

    /// The active player picked a cell that is not on the opponent's board.
    #[error(transparent)]
    Shot(#[from] ShotError),
}
