use std::io;

use thiserror::Error;

use crate::fleet::FleetError;

/// Reasons a player could not take their turn or set up their board.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Every cell of the opponent's board has already been targeted.
    #[error("no untargeted cells are left")]
    NoMovesLeft,
    /// The console reached end of input while waiting for the player.
    #[error("input closed while waiting for the player")]
    InputClosed,
    /// Reading from or writing to the console failed.
    #[error("console error")]
    Io(#[from] io::Error),
    /// The player's fleet could not be placed.
    #[error(transparent)]
    Fleet(#[from] FleetError),
}
