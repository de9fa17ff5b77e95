//! Types used for defining ships and tracking the damage they take.
use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::coordinate::{Coordinate, CoordinateError, Dimensions};

mod linear;

/// The class of a ship. Each class has a fixed length.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ShipKind {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Cruiser: length 3.
    Cruiser,
    /// Submarine: length 3.
    Submarine,
    /// Destroyer: length 2.
    Destroyer,
    /// Patrol boat: length 1.
    PatrolBoat,
}

impl ShipKind {
    /// Every ship kind, longest first.
    pub const ALL: &'static [ShipKind] = &[
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::PatrolBoat,
    ];

    /// The standard five-ship fleet.
    pub const CLASSIC_FLEET: &'static [ShipKind] = &[
        ShipKind::Carrier,
        ShipKind::Battleship,
        ShipKind::Cruiser,
        ShipKind::Submarine,
        ShipKind::Destroyer,
    ];

    /// Get the length of this ship kind.
    pub fn len(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
            ShipKind::PatrolBoat => 1,
        }
    }

    /// The full lowercase name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "carrier",
            ShipKind::Battleship => "battleship",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Submarine => "submarine",
            ShipKind::Destroyer => "destroyer",
            ShipKind::PatrolBoat => "patrol boat",
        }
    }

    /// Two letter abbreviation used when drawing boards.
    pub fn abbrev(self) -> &'static str {
        match self {
            ShipKind::Carrier => "cv",
            ShipKind::Battleship => "bb",
            ShipKind::Cruiser => "cl",
            ShipKind::Submarine => "ss",
            ShipKind::Destroyer => "dd",
            ShipKind::PatrolBoat => "pb",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown ship kind.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown ship {0:?}, choose \"carrier\", \"battleship\", \"cruiser\", \"submarine\", \"destroyer\" or \"patrol\"")]
pub struct UnknownShipKind(String);

impl FromStr for ShipKind {
    type Err = UnknownShipKind;

    /// Parses full names and abbreviations, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cv" | "carrier" => Ok(ShipKind::Carrier),
            "bb" | "battleship" => Ok(ShipKind::Battleship),
            "ca" | "cl" | "cruiser" => Ok(ShipKind::Cruiser),
            "ss" | "sub" | "submarine" => Ok(ShipKind::Submarine),
            "dd" | "destroyer" => Ok(ShipKind::Destroyer),
            "pb" | "patrol" | "patrolboat" | "patrol boat" => Ok(ShipKind::PatrolBoat),
            _ => Err(UnknownShipKind(s.to_owned())),
        }
    }
}

/// Direction a ship extends from its starting cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// Extends to the right, along a row.
    Horizontal,
    /// Extends downwards, along a column.
    Vertical,
}

/// Reason why a set of coordinates does not form a valid ship.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ShipShapeError {
    /// The number of coordinates differs from the length of the kind.
    #[error("a {kind} needs {expected} cells, got {actual}")]
    WrongLength {
        kind: ShipKind,
        expected: usize,
        actual: usize,
    },
    /// The coordinates are not one straight, unbroken horizontal or vertical line.
    #[error("a {0} must occupy one straight horizontal or vertical line")]
    NotContiguous(ShipKind),
}

/// Error returned when building a ship from typed labels.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ShipLabelError {
    #[error(transparent)]
    Coordinate(#[from] CoordinateError),
    #[error(transparent)]
    Shape(#[from] ShipShapeError),
}

/// A ship, the cells it occupies, and which of those cells have been hit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    kind: ShipKind,
    /// Occupied cells, in placement order.
    cells: Vec<Coordinate>,
    /// Hit flag for each entry in `cells`.
    hits: Vec<bool>,
}

impl Ship {
    /// Construct a ship of the given kind over the given cells. The cells must form a
    /// straight line of the kind's length.
    pub fn new(kind: ShipKind, cells: Vec<Coordinate>) -> Result<Self, ShipShapeError> {
        if cells.len() != kind.len() {
            return Err(ShipShapeError::WrongLength {
                kind,
                expected: kind.len(),
                actual: cells.len(),
            });
        }
        if !linear::is_line(&cells) {
            return Err(ShipShapeError::NotContiguous(kind));
        }
        let hits = vec![false; cells.len()];
        Ok(Self { kind, cells, hits })
    }

    /// Construct a ship that runs between two end cells, given in either order.
    pub fn from_ends(
        kind: ShipKind,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Self, ShipShapeError> {
        let cells = linear::span(start, end).ok_or(ShipShapeError::NotContiguous(kind))?;
        Self::new(kind, cells)
    }

    /// Construct a ship starting at `start` and extending in the given orientation.
    /// The ship may run off the edge of a board, in which case that board rejects it.
    pub fn extending(kind: ShipKind, start: Coordinate, orientation: Orientation) -> Self {
        let cells = linear::extend(start, kind.len(), orientation);
        let hits = vec![false; cells.len()];
        Self { kind, cells, hits }
    }

    /// Construct a ship from end labels such as `"A3"` and `"C3"` on a board with the
    /// given dimensions.
    pub fn from_labels(
        kind: ShipKind,
        start: &str,
        end: &str,
        dim: &Dimensions,
    ) -> Result<Self, ShipLabelError> {
        let start = dim.parse(start)?;
        let end = dim.parse(end)?;
        Ok(Self::from_ends(kind, start, end)?)
    }

    /// The kind of this ship.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Number of cells the ship occupies.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// The cells this ship occupies.
    pub fn coords(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Direction the ship runs in. A ship of a single cell has none.
    pub fn orientation(&self) -> Option<Orientation> {
        match self.cells.as_slice() {
            [first, second, ..] if first.row == second.row => Some(Orientation::Horizontal),
            [_, _, ..] => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Get an iterator over the coordinates of this ship and whether those coords have
    /// been hit.
    pub fn hits(&self) -> impl '_ + Iterator<Item = (Coordinate, bool)> {
        self.cells.iter().copied().zip(self.hits.iter().copied())
    }

    /// Returns true if the ship occupies the given cell.
    pub fn occupies(&self, coord: &Coordinate) -> bool {
        self.cells.contains(coord)
    }

    /// Record a hit on the given cell. Returns `false` and changes nothing if the ship
    /// does not occupy the cell.
    pub fn record_hit(&mut self, coord: &Coordinate) -> bool {
        match self.cells.iter().position(|c| c == coord) {
            Some(idx) => {
                self.hits[idx] = true;
                true
            }
            None => false,
        }
    }

    /// Whether the given cell of this ship has been hit.
    pub fn is_hit_at(&self, coord: &Coordinate) -> bool {
        self.hits().any(|(c, hit)| hit && &c == coord)
    }

    /// Number of distinct cells that have been hit.
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&hit| hit).count()
    }

    /// Check if every cell of this ship has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&hit| hit)
    }

    /// Returns true if any cell of `other` is on or touches (including diagonally) this
    /// ship.
    pub fn is_near(&self, other: &Ship) -> bool {
        self.cells
            .iter()
            .any(|mine| other.cells.iter().any(|theirs| Dimensions::is_near(mine, theirs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Ship::new(ShipKind::Cruiser, vec![c(0, 0), c(0, 1)]).unwrap_err();
        assert_eq!(
            err,
            ShipShapeError::WrongLength {
                kind: ShipKind::Cruiser,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn rejects_broken_and_bent_lines() {
        for cells in vec![
            vec![c(0, 0), c(0, 2), c(0, 3)],
            vec![c(0, 0), c(0, 1), c(1, 1)],
            vec![c(0, 0), c(0, 1), c(0, 0)],
            vec![c(0, 0), c(1, 1), c(2, 2)],
        ] {
            assert_eq!(
                Ship::new(ShipKind::Submarine, cells.clone()),
                Err(ShipShapeError::NotContiguous(ShipKind::Submarine)),
                "{:?}",
                cells
            );
        }
    }

    #[test]
    fn accepts_lines_in_either_direction() {
        assert!(Ship::new(ShipKind::Cruiser, vec![c(2, 5), c(1, 5), c(0, 5)]).is_ok());
        assert!(Ship::new(ShipKind::Cruiser, vec![c(4, 1), c(4, 2), c(4, 3)]).is_ok());
        assert!(Ship::new(ShipKind::PatrolBoat, vec![c(7, 7)]).is_ok());
    }

    #[test]
    fn from_ends_orders_cells() {
        let ship = Ship::from_ends(ShipKind::Cruiser, c(3, 4), c(3, 2)).unwrap();
        assert_eq!(ship.coords(), &[c(3, 2), c(3, 3), c(3, 4)]);
        assert_eq!(
            Ship::from_ends(ShipKind::Cruiser, c(0, 0), c(2, 2)),
            Err(ShipShapeError::NotContiguous(ShipKind::Cruiser))
        );
    }

    #[test]
    fn from_labels_parses_both_ends() {
        let dim = Dimensions::default();
        let ship = Ship::from_labels(ShipKind::Cruiser, "A3", "c3", &dim).unwrap();
        assert_eq!(ship.coords(), &[c(2, 0), c(2, 1), c(2, 2)]);
        assert!(matches!(
            Ship::from_labels(ShipKind::Cruiser, "A3", "Z3", &dim),
            Err(ShipLabelError::Coordinate(_))
        ));
        assert!(matches!(
            Ship::from_labels(ShipKind::Cruiser, "A3", "D3", &dim),
            Err(ShipLabelError::Shape(ShipShapeError::WrongLength { .. }))
        ));
    }

    #[test]
    fn sinks_only_when_every_cell_is_hit() {
        let mut ship = Ship::from_ends(ShipKind::Destroyer, c(0, 0), c(1, 0)).unwrap();
        assert!(!ship.record_hit(&c(5, 5)));
        assert_eq!(ship.hit_count(), 0);
        assert!(ship.record_hit(&c(0, 0)));
        assert!(ship.record_hit(&c(0, 0)));
        assert_eq!(ship.hit_count(), 1);
        assert!(!ship.is_sunk());
        assert!(ship.record_hit(&c(1, 0)));
        assert!(ship.is_sunk());
        assert!(!ship.record_hit(&c(2, 0)));
        assert!(ship.is_sunk());
    }

    #[test]
    fn tracks_hits_per_cell() {
        let mut ship = Ship::extending(ShipKind::Cruiser, c(2, 1), Orientation::Horizontal);
        ship.record_hit(&c(2, 2));
        assert!(ship.is_hit_at(&c(2, 2)));
        assert!(!ship.is_hit_at(&c(2, 1)));
        assert!(!ship.is_hit_at(&c(0, 0)));
        assert_eq!(
            ship.hits().collect::<Vec<_>>(),
            vec![(c(2, 1), false), (c(2, 2), true), (c(2, 3), false)]
        );
    }

    #[test]
    fn reports_orientation() {
        let across = Ship::from_ends(ShipKind::Cruiser, c(3, 4), c(3, 2)).unwrap();
        assert_eq!(across.orientation(), Some(Orientation::Horizontal));
        let down = Ship::extending(ShipKind::Carrier, c(0, 7), Orientation::Vertical);
        assert_eq!(down.orientation(), Some(Orientation::Vertical));
        let single = Ship::new(ShipKind::PatrolBoat, vec![c(4, 4)]).unwrap();
        assert_eq!(single.orientation(), None);
    }

    #[test]
    fn nearby_ships_touch_diagonally() {
        let ship = Ship::extending(ShipKind::Cruiser, c(1, 1), Orientation::Horizontal);
        let diagonal = Ship::extending(ShipKind::Destroyer, c(2, 4), Orientation::Vertical);
        let apart = Ship::extending(ShipKind::Destroyer, c(3, 1), Orientation::Horizontal);
        assert!(ship.is_near(&diagonal));
        assert!(diagonal.is_near(&ship));
        assert!(!ship.is_near(&apart));
    }

    #[test]
    fn parses_kind_names() {
        assert_eq!("CV".parse(), Ok(ShipKind::Carrier));
        assert_eq!(" sub ".parse(), Ok(ShipKind::Submarine));
        assert_eq!("patrol".parse(), Ok(ShipKind::PatrolBoat));
        assert!("dinghy".parse::<ShipKind>().is_err());
    }
}
