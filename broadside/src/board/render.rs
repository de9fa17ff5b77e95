//! Display snapshots of a board.

use std::fmt;

use crate::{
    board::CellRef,
    coordinate::{Coordinate, Dimensions},
    ships::ShipKind,
};

/// Whose eyes a board is rendered for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum View {
    /// The board's owner, who knows where every ship is.
    Owner,
    /// The opponent, who only knows the results of their own shots.
    Opponent,
}

/// What a viewer can see in a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CellView {
    /// Not shot at, and the viewer cannot see what is there.
    Unknown,
    /// Empty water that has not been shot at.
    Water,
    /// A ship cell that has not been hit.
    Ship(ShipKind),
    /// Shot at, nothing there.
    Miss,
    /// A hit on a ship that is still afloat. The kind is only known to the owner.
    Hit(Option<ShipKind>),
    /// A hit on a ship that has been sunk.
    Sunk(ShipKind),
}

impl CellView {
    pub(super) fn of(cell: &CellRef, view: View) -> Self {
        match (cell.ship(), view) {
            (None, _) if cell.shot() => CellView::Miss,
            (None, View::Owner) => CellView::Water,
            (_, View::Opponent) if !cell.shot() => CellView::Unknown,
            (Some(ship), _) if ship.is_sunk() => CellView::Sunk(ship.kind()),
            (Some(ship), View::Owner) if ship.is_hit_at(&cell.coord()) => {
                CellView::Hit(Some(ship.kind()))
            }
            (Some(_), View::Opponent) => CellView::Hit(None),
            (Some(ship), View::Owner) => CellView::Ship(ship.kind()),
            (None, View::Opponent) => CellView::Unknown,
        }
    }
}

impl fmt::Display for CellView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CellView::Unknown | CellView::Water => f.pad("~~"),
            CellView::Ship(kind) => f.pad(kind.abbrev()),
            CellView::Miss => f.pad("x"),
            CellView::Hit(None) => f.pad("*"),
            CellView::Hit(Some(kind)) => f.pad(&format!("x{}", kind.abbrev())),
            CellView::Sunk(kind) => f.pad(&format!("X{}", kind.abbrev())),
        }
    }
}

/// A snapshot of every cell on a board as seen by one viewer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rendering {
    dim: Dimensions,
    /// Cells in row-major order.
    cells: Vec<CellView>,
}

impl Rendering {
    pub(super) fn new(dim: Dimensions, cells: Vec<CellView>) -> Self {
        debug_assert_eq!(cells.len(), dim.total_size());
        Self { dim, cells }
    }

    /// Get the view of the cell at the given coordinate.
    pub fn get(&self, coord: &Coordinate) -> Option<CellView> {
        self.dim
            .try_linearize(coord)
            .and_then(|idx| self.cells.get(idx))
            .copied()
    }

    /// Iterate the rows of the rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(self.dim.cols())
    }
}

impl fmt::Display for Rendering {
    /// Draws the grid with column letters across the top and row numbers down the side.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "    ")?;
        for col in 0..self.dim.cols() {
            let letter = char::from(b'A' + col as u8);
            write!(f, "{:^4}", letter)?;
        }
        writeln!(f)?;
        for (row, cells) in self.rows().enumerate() {
            write!(f, "{:>3} ", row + 1)?;
            for cell in cells {
                write!(f, "{:^4}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        board::{Board, CellView, View},
        coordinate::{Coordinate, Dimensions},
        ships::{Orientation, Ship, ShipKind},
    };

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    fn board() -> Board {
        let mut board = Board::new(Dimensions::new(3, 4));
        board
            .place_ships(vec![
                Ship::extending(ShipKind::Destroyer, c(0, 0), Orientation::Horizontal),
                Ship::extending(ShipKind::PatrolBoat, c(2, 3), Orientation::Vertical),
            ])
            .unwrap();
        board.receive_shot(c(0, 0)).unwrap();
        board.receive_shot(c(2, 3)).unwrap();
        board.receive_shot(c(1, 1)).unwrap();
        board
    }

    #[test]
    fn owner_sees_everything() {
        let view = board().render(View::Owner);
        assert_eq!(view.get(&c(0, 0)), Some(CellView::Hit(Some(ShipKind::Destroyer))));
        assert_eq!(view.get(&c(0, 1)), Some(CellView::Ship(ShipKind::Destroyer)));
        assert_eq!(view.get(&c(1, 1)), Some(CellView::Miss));
        assert_eq!(view.get(&c(1, 2)), Some(CellView::Water));
        assert_eq!(view.get(&c(2, 3)), Some(CellView::Sunk(ShipKind::PatrolBoat)));
    }

    #[test]
    fn opponent_sees_only_shot_results() {
        let view = board().render(View::Opponent);
        assert_eq!(view.get(&c(0, 0)), Some(CellView::Hit(None)));
        assert_eq!(view.get(&c(0, 1)), Some(CellView::Unknown));
        assert_eq!(view.get(&c(1, 1)), Some(CellView::Miss));
        assert_eq!(view.get(&c(1, 2)), Some(CellView::Unknown));
        assert_eq!(view.get(&c(2, 3)), Some(CellView::Sunk(ShipKind::PatrolBoat)));
        assert_eq!(view.get(&c(3, 0)), None);
    }

    #[test]
    fn draws_labelled_grid() {
        let text = board().render(View::Opponent).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].trim(), "A   B   C   D");
        assert!(lines[1].trim_start().starts_with("1 "));
        assert!(lines[3].contains("Xpb"));
    }
}
