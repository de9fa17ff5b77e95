//! The participants of a game. A player owns their board and decides where to fire.

use rand::RngCore;

use crate::{
    board::{Board, ShotOutcome},
    coordinate::Coordinate,
    fleet::FleetGenerator,
};

pub use self::{
    errors::PlayerError,
    input::{LineInput, Scripted, Terminal},
    manual::ManualPlayer,
    random::RandomPlayer,
};

mod errors;
mod input;
mod manual;
mod random;

/// One side of a game.
pub trait Player {
    /// Name shown in prompts and results.
    fn name(&self) -> &str;

    /// The player's own board.
    fn board(&self) -> &Board;

    /// Mutable access to the player's own board.
    fn board_mut(&mut self) -> &mut Board;

    /// Lay out the player's fleet on their own board.
    fn place_fleet(
        &mut self,
        generator: &FleetGenerator,
        rng: &mut dyn RngCore,
    ) -> Result<(), PlayerError>;

    /// Choose the next cell to fire at on the opponent's board.
    fn select_target(&mut self, opponent: &Board) -> Result<Coordinate, PlayerError>;

    /// Told the result of the shot this player just fired.
    fn receive_result(
        &mut self,
        _target: Coordinate,
        _outcome: ShotOutcome,
    ) -> Result<(), PlayerError> {
        Ok(())
    }

    /// True once every ship of this player has been sunk.
    fn has_lost(&self) -> bool {
        self.board().all_sunk()
    }
}
