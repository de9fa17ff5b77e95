//! Errors used by the `Board`.

use thiserror::Error;

use crate::{
    coordinate::{Coordinate, Dimensions},
    ships::ShipKind,
};

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the ship's cells lies outside the grid.
    #[error("the ship does not fit on the board")]
    OutOfBounds,
    /// One or more of the ship's cells is already occupied by another ship.
    #[error("the ship overlaps another ship")]
    Overlap,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("could not place {ship} at {coord}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    /// Kind of the ship that was rejected.
    ship: ShipKind,
    /// First offending cell of the ship.
    coord: Coordinate,
}

impl PlaceError {
    /// Construct a placement error from a reason, ship kind, and offending cell.
    pub(super) fn new(reason: CannotPlaceReason, ship: ShipKind, coord: Coordinate) -> Self {
        Self {
            reason,
            ship,
            coord,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the kind of ship that could not be placed.
    pub fn ship(&self) -> ShipKind {
        self.ship
    }

    /// Get the first cell that caused the placement to fail.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Error returned when trying to shoot a cell that is not on the board.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord}: outside the {dim} board")]
pub struct ShotError {
    /// The coordinates of the cell.
    coord: Coordinate,

    /// Dimensions of the board that was shot at.
    dim: Dimensions,
}

impl ShotError {
    /// Construct a shot error for the specified cell.
    pub(super) fn new(coord: Coordinate, dim: Dimensions) -> Self {
        Self { coord, dim }
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
