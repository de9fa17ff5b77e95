//! Types that make up the game board.

use std::{collections::HashSet, fmt};

use log::trace;

use crate::{
    coordinate::{Coordinate, Dimensions},
    ships::{Ship, ShipKind},
};

use self::grid::Grid;
pub use self::{
    errors::{CannotPlaceReason, PlaceError, ShotError},
    render::{CellView, Rendering, View},
};

mod errors;
mod grid;
mod render;

/// Reference to a particular cell in the grid.
#[derive(Debug, Copy, Clone)]
pub struct CellRef<'a> {
    /// Coordinate of this cell.
    coord: Coordinate,

    /// Whether this cell was shot at.
    shot: bool,

    /// Reference to the ship that occupies this cell if any.
    ship: Option<&'a Ship>,
}

impl<'a> CellRef<'a> {
    /// The grid coordinate of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Whether this cell has been shot at previously.
    pub fn shot(&self) -> bool {
        self.shot
    }

    /// The ship that occupies this cell, if any.
    pub fn ship(&self) -> Option<&'a Ship> {
        self.ship
    }
}

/// Result of a single shot on a player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship of the given kind, but did not sink it.
    Hit(ShipKind),
    /// The shot hit a ship of the given kind and sank it.
    Sunk(ShipKind),
    /// The cell had already been shot at. Nothing changed.
    AlreadyShot,
}

impl ShotOutcome {
    /// Get the kind of the ship that was hit, if any.
    pub fn ship(&self) -> Option<ShipKind> {
        match *self {
            ShotOutcome::Hit(kind) | ShotOutcome::Sunk(kind) => Some(kind),
            ShotOutcome::Miss | ShotOutcome::AlreadyShot => None,
        }
    }

    /// Whether the shot sank a ship.
    pub fn is_sunk(&self) -> bool {
        matches!(self, ShotOutcome::Sunk(_))
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShotOutcome::Miss => f.write_str("miss"),
            ShotOutcome::Hit(_) => f.write_str("hit"),
            ShotOutcome::Sunk(kind) => write!(f, "sunk the {}", kind),
            ShotOutcome::AlreadyShot => f.write_str("already shot"),
        }
    }
}

/// Represents a single player's board, including their ships and their side of the ocean.
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cells occupied by ships.
    grid: Grid,

    /// All placed ships. Grid cells refer to ships by index into this list.
    ships: Vec<Ship>,

    /// Every cell shot at, in the order the shots arrived.
    shots: Vec<Coordinate>,
}

impl Board {
    /// Construct an empty board with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
            ships: Vec::new(),
            shots: Vec::new(),
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Place a single ship. Fails without changing the board if any of its cells is
    /// off the grid or already occupied.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        self.place_ships(Some(ship))
    }

    /// Place a batch of ships. Every ship is checked against the grid and against the
    /// rest of the batch before any of them is placed, so on error the board is
    /// unchanged.
    pub fn place_ships<S>(&mut self, ships: S) -> Result<(), PlaceError>
    where
        S: IntoIterator<Item = Ship>,
    {
        let ships: Vec<Ship> = ships.into_iter().collect();
        let mut claimed = HashSet::new();
        for ship in &ships {
            for coord in ship.coords() {
                match self.grid.get(coord) {
                    None => {
                        return Err(PlaceError::new(
                            CannotPlaceReason::OutOfBounds,
                            ship.kind(),
                            *coord,
                        ))
                    }
                    Some(cell) if cell.ship.is_some() => {
                        return Err(PlaceError::new(
                            CannotPlaceReason::Overlap,
                            ship.kind(),
                            *coord,
                        ))
                    }
                    Some(_) if !claimed.insert(*coord) => {
                        return Err(PlaceError::new(
                            CannotPlaceReason::Overlap,
                            ship.kind(),
                            *coord,
                        ))
                    }
                    Some(_) => {}
                }
            }
        }
        // Already ensured that every position is valid and not occupied.
        for ship in ships {
            let idx = self.ships.len();
            for coord in ship.coords() {
                self.grid[coord].ship = Some(idx);
            }
            trace!("placed {} at {:?}", ship.kind(), ship.coords());
            self.ships.push(ship);
        }
        Ok(())
    }

    /// Get all ships on this board, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships that are still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|ship| !ship.is_sunk()).count()
    }

    /// Get the ship occupying the given cell, if any.
    pub fn ship_at(&self, coord: &Coordinate) -> Option<&Ship> {
        self.grid
            .get(coord)
            .and_then(|cell| cell.ship)
            .map(|idx| &self.ships[idx])
    }

    /// Whether the given cell has been shot at. Cells off the board never have.
    pub fn is_shot(&self, coord: &Coordinate) -> bool {
        self.grid.get(coord).map_or(false, |cell| cell.shot)
    }

    /// Every cell shot at so far, oldest first.
    pub fn shots(&self) -> &[Coordinate] {
        &self.shots
    }

    /// Get a reference to the cell at the given coordinate. Returns None if the
    /// coordinate is out of bounds.
    pub fn get_coord(&self, coord: Coordinate) -> Option<CellRef<'_>> {
        self.grid.get(&coord).map(|cell| CellRef {
            coord,
            shot: cell.shot,
            ship: cell.ship.map(|idx| &self.ships[idx]),
        })
    }

    /// Get an iterator over the rows of this board. Each row is an iterator over the
    /// cells in that row.
    pub fn iter_board(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = CellRef<'_>>> {
        self.grid.dim.iter_coordinates().map(move |row| {
            row.filter_map(move |coord| self.get_coord(coord))
        })
    }

    /// Returns true if every ship on this board has been sunk. A board without ships
    /// counts as sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Resolve a shot fired at this board.
    ///
    /// A cell that was already shot at yields [`ShotOutcome::AlreadyShot`] and leaves the
    /// board untouched. Otherwise the shot is recorded and the outcome says whether it
    /// missed, hit, or sank a ship.
    pub fn receive_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        let dim = self.grid.dim;
        let cell = self
            .grid
            .get_mut(&coord)
            .ok_or_else(|| ShotError::new(coord, dim))?;
        if cell.shot {
            return Ok(ShotOutcome::AlreadyShot);
        }
        cell.shot = true;
        let hit_ship = cell.ship;
        self.shots.push(coord);

        Ok(match hit_ship {
            None => ShotOutcome::Miss,
            Some(idx) => {
                let ship = &mut self.ships[idx];
                ship.record_hit(&coord);
                if ship.is_sunk() {
                    ShotOutcome::Sunk(ship.kind())
                } else {
                    ShotOutcome::Hit(ship.kind())
                }
            }
        })
    }

    /// Produce a grid of cell states for display, either as the owner sees it or as the
    /// opponent sees it.
    pub fn render(&self, view: View) -> Rendering {
        Rendering::new(
            self.grid.dim,
            self.iter_board()
                .flatten()
                .map(|cell| CellView::of(&cell, view))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Orientation;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn board_with_destroyer() -> Board {
        let mut board = Board::new(Dimensions::new(5, 5));
        board
            .place_ship(Ship::from_ends(ShipKind::Destroyer, c(0, 0), c(1, 0)).unwrap())
            .unwrap();
        board
    }

    #[test]
    fn miss_hit_sunk_sequence() {
        let mut board = board_with_destroyer();
        assert_eq!(board.receive_shot(c(0, 1)), Ok(ShotOutcome::Miss));
        assert_eq!(
            board.receive_shot(c(0, 0)),
            Ok(ShotOutcome::Hit(ShipKind::Destroyer))
        );
        assert!(!board.all_sunk());
        assert_eq!(
            board.receive_shot(c(1, 0)),
            Ok(ShotOutcome::Sunk(ShipKind::Destroyer))
        );
        assert!(board.all_sunk());
        assert_eq!(board.remaining_ships(), 0);
        assert_eq!(board.shots(), &[c(0, 1), c(0, 0), c(1, 0)]);
    }

    #[test]
    fn outcome_names_the_ship() {
        assert_eq!(ShotOutcome::Miss.ship(), None);
        assert_eq!(ShotOutcome::AlreadyShot.ship(), None);
        assert_eq!(
            ShotOutcome::Hit(ShipKind::Cruiser).ship(),
            Some(ShipKind::Cruiser)
        );
        assert_eq!(
            ShotOutcome::Sunk(ShipKind::Carrier).ship(),
            Some(ShipKind::Carrier)
        );
        assert!(ShotOutcome::Sunk(ShipKind::Carrier).is_sunk());
        assert!(!ShotOutcome::Hit(ShipKind::Cruiser).is_sunk());
        assert!(!ShotOutcome::AlreadyShot.is_sunk());
    }

    #[test]
    fn repeat_shot_changes_nothing() {
        let mut board = board_with_destroyer();
        board.receive_shot(c(0, 0)).unwrap();
        board.receive_shot(c(3, 3)).unwrap();
        let ships_before = board.ships().to_vec();
        assert_eq!(board.receive_shot(c(0, 0)), Ok(ShotOutcome::AlreadyShot));
        assert_eq!(board.receive_shot(c(3, 3)), Ok(ShotOutcome::AlreadyShot));
        assert_eq!(board.ships(), &ships_before[..]);
        assert_eq!(board.shots().len(), 2);
    }

    #[test]
    fn shot_off_the_board_is_an_error() {
        let mut board = board_with_destroyer();
        let err = board.receive_shot(c(5, 0)).unwrap_err();
        assert_eq!(err.coord(), c(5, 0));
        assert!(board.shots().is_empty());
    }

    #[test]
    fn rejects_overlap_with_placed_ship() {
        let mut board = board_with_destroyer();
        let err = board
            .place_ship(Ship::extending(ShipKind::Cruiser, c(1, 0), Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Overlap);
        assert_eq!(err.ship(), ShipKind::Cruiser);
        assert_eq!(err.coord(), c(1, 0));
        assert_eq!(board.ships().len(), 1);
    }

    #[test]
    fn rejects_overlap_within_batch_atomically() {
        let mut board = Board::new(Dimensions::new(5, 5));
        let err = board
            .place_ships(vec![
                Ship::extending(ShipKind::Cruiser, c(2, 0), Orientation::Horizontal),
                Ship::extending(ShipKind::Destroyer, c(1, 2), Orientation::Vertical),
            ])
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Overlap);
        assert!(board.ships().is_empty());
        assert!(board.ship_at(&c(2, 0)).is_none());
    }

    #[test]
    fn rejects_out_of_bounds() {
        let mut board = Board::new(Dimensions::new(5, 5));
        let err = board
            .place_ship(Ship::extending(ShipKind::Carrier, c(0, 1), Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert_eq!(err.coord(), c(0, 5));
        assert!(board.ships().is_empty());
    }

    #[test]
    fn empty_board_counts_as_sunk() {
        assert!(Board::new(Dimensions::default()).all_sunk());
    }

    #[test]
    fn cell_refs_report_ships_and_shots() {
        let mut board = board_with_destroyer();
        board.receive_shot(c(1, 0)).unwrap();
        let cell = board.get_coord(c(1, 0)).unwrap();
        assert!(cell.shot());
        assert_eq!(cell.ship().map(Ship::kind), Some(ShipKind::Destroyer));
        assert!(board.get_coord(c(9, 9)).is_none());
        assert_eq!(board.iter_board().flatten().count(), 25);
    }
}
