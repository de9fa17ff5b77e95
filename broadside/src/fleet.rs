//! Random placement of a fleet of ships.

use log::debug;
use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::{
    board::{Board, PlaceError},
    coordinate::Dimensions,
    ships::{Orientation, Ship, ShipKind},
};

/// How many times a whole fleet is laid out from scratch before giving up.
const MAX_RESTARTS: usize = 100;

/// Whether randomly placed ships may touch each other.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Spacing {
    /// Ships may be placed next to each other as long as they don't overlap.
    Touching,
    /// Ships may not touch, not even diagonally.
    Apart,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Apart
    }
}

/// Error returned when a fleet cannot be laid out.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// No arrangement was found for the ships on the board.
    #[error("could not fit the fleet on a {dim} board after {attempts} attempts")]
    NoRoom { dim: Dimensions, attempts: usize },
    /// The generated ships were rejected by the board.
    #[error(transparent)]
    Place(#[from] PlaceError),
}

/// Lays out a fleet of ships at random positions.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FleetGenerator {
    /// Kinds of ship in the fleet, one entry per ship.
    kinds: Vec<ShipKind>,
    spacing: Spacing,
}

impl FleetGenerator {
    /// Create a generator for the given ship kinds.
    pub fn new<K: Into<Vec<ShipKind>>>(kinds: K, spacing: Spacing) -> Self {
        Self {
            kinds: kinds.into(),
            spacing,
        }
    }

    /// The kinds of ship in the fleet.
    pub fn kinds(&self) -> &[ShipKind] {
        &self.kinds
    }

    /// Generate the whole fleet for an empty board of the given dimensions.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        dim: &Dimensions,
        rng: &mut R,
    ) -> Result<Vec<Ship>, FleetError> {
        self.generate_around(dim, &[], &self.kinds, rng)
    }

    /// Place the whole fleet on the board.
    pub fn populate<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) -> Result<(), FleetError> {
        self.fill(board, &self.kinds, rng)
    }

    /// Place ships of the given kinds on the board around the ships already there.
    pub fn fill<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        kinds: &[ShipKind],
        rng: &mut R,
    ) -> Result<(), FleetError> {
        let ships = self.generate_around(board.dimensions(), board.ships(), kinds, rng)?;
        board.place_ships(ships)?;
        Ok(())
    }

    fn generate_around<R: Rng + ?Sized>(
        &self,
        dim: &Dimensions,
        existing: &[Ship],
        kinds: &[ShipKind],
        rng: &mut R,
    ) -> Result<Vec<Ship>, FleetError> {
        let needed: usize = kinds.iter().map(|kind| kind.len()).sum();
        if needed + existing.iter().map(Ship::len).sum::<usize>() > dim.total_size() {
            return Err(FleetError::NoRoom {
                dim: *dim,
                attempts: 0,
            });
        }

        'restart: for attempt in 1..=MAX_RESTARTS {
            let mut placed: Vec<Ship> = Vec::with_capacity(kinds.len());
            for &kind in kinds {
                let candidates: Vec<Ship> = self
                    .candidates(dim, kind)
                    .filter(|ship| {
                        existing
                            .iter()
                            .chain(placed.iter())
                            .all(|other| self.clear_of(ship, other))
                    })
                    .collect();
                match candidates.choose(rng) {
                    Some(ship) => placed.push(ship.clone()),
                    None => {
                        debug!("no room for {} on attempt {}, restarting", kind, attempt);
                        continue 'restart;
                    }
                }
            }
            return Ok(placed);
        }
        Err(FleetError::NoRoom {
            dim: *dim,
            attempts: MAX_RESTARTS,
        })
    }

    /// Every placement of a ship of the given kind that fits on the board.
    fn candidates<'a>(&self, dim: &'a Dimensions, kind: ShipKind) -> impl 'a + Iterator<Item = Ship> {
        let orientations: &[Orientation] = if kind.len() == 1 {
            &[Orientation::Horizontal]
        } else {
            &[Orientation::Horizontal, Orientation::Vertical]
        };
        dim.coordinates()
            .flat_map(move |start| {
                orientations
                    .iter()
                    .map(move |&dir| Ship::extending(kind, start, dir))
            })
            .filter(move |ship| ship.coords().iter().all(|coord| dim.contains(coord)))
    }

    /// Whether `ship` may be placed given that `other` is already on the board.
    fn clear_of(&self, ship: &Ship, other: &Ship) -> bool {
        match self.spacing {
            Spacing::Touching => !ship.coords().iter().any(|coord| other.occupies(coord)),
            Spacing::Apart => !ship.is_near(other),
        }
    }
}

impl Default for FleetGenerator {
    /// The classic five-ship fleet, placed apart.
    fn default() -> Self {
        Self::new(ShipKind::CLASSIC_FLEET, Spacing::default())
    }
}
