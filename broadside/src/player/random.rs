use std::collections::HashSet;

use log::trace;
use rand::{seq::SliceRandom, Rng, RngCore};

use crate::{
    board::Board,
    coordinate::{Coordinate, Dimensions},
    fleet::FleetGenerator,
    player::{Player, PlayerError},
};

/// Computer player that fires at a uniformly random cell it has not targeted yet.
#[derive(Debug)]
pub struct RandomPlayer<R> {
    name: String,
    board: Board,
    rng: R,
    /// Every cell this player has fired at.
    targeted: HashSet<Coordinate>,
}

impl<R: Rng> RandomPlayer<R> {
    /// Create a player with an empty board that draws its shots from `rng`.
    pub fn new<S: Into<String>>(name: S, dim: Dimensions, rng: R) -> Self {
        Self {
            name: name.into(),
            board: Board::new(dim),
            rng,
            targeted: HashSet::new(),
        }
    }

    /// Cells this player has already fired at.
    pub fn targeted(&self) -> &HashSet<Coordinate> {
        &self.targeted
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn place_fleet(
        &mut self,
        generator: &FleetGenerator,
        rng: &mut dyn RngCore,
    ) -> Result<(), PlayerError> {
        generator.populate(&mut self.board, rng)?;
        Ok(())
    }

    fn select_target(&mut self, opponent: &Board) -> Result<Coordinate, PlayerError> {
        let targeted = &self.targeted;
        let open: Vec<Coordinate> = opponent
            .dimensions()
            .coordinates()
            .filter(|coord| !targeted.contains(coord))
            .collect();
        let target = *open.choose(&mut self.rng).ok_or(PlayerError::NoMovesLeft)?;
        trace!("{} picked {} out of {} open cells", self.name, target, open.len());
        self.targeted.insert(target);
        Ok(target)
    }
}
