//! Board dimensions, grid coordinates, and conversion between coordinates and the
//! human-readable labels typed at the console (`"B4"` is column `B`, row `4`).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Columns are labelled with a single letter, so boards can be at most this wide.
pub const MAX_COLS: usize = 26;

/// The coordinates of a single cell in the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Vertical position of the cell, counted from the top.
    pub row: usize,
    /// Horizontal position of the cell, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    /// Writes the canonical label of the coordinate, e.g. `B4`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.col < MAX_COLS {
            let letter = char::from(b'A' + self.col as u8);
            write!(f, "{}{}", letter, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// Error produced when a label cannot be turned into a [`Coordinate`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum CoordinateError {
    /// The label is not a column letter followed by a row number.
    #[error("invalid coordinate {0:?}: expected a column letter followed by a row number, like B4")]
    Malformed(String),
    /// The label is well formed but names a cell outside the board.
    #[error("invalid coordinate {label:?}: outside the {dim} board")]
    OutOfBounds { label: String, dim: Dimensions },
}

/// Simple rectangular dimensions of a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Number of rows. This cooresponds to [`Coordinate::row`].
    rows: usize,
    /// Number of columns. This cooresponds to [`Coordinate::col`].
    cols: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Panics if either is 0 or if `cols` exceeds [`MAX_COLS`].
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Some(dim) => dim,
            None => panic!(
                "Dimensions must be nonzero with at most {} columns, got {}x{}",
                MAX_COLS, rows, cols
            ),
        }
    }

    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Returns `None` if either is 0, if `cols` exceeds [`MAX_COLS`], or if `rows * cols`
    /// exceeds `usize::max_value()`.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 || cols > MAX_COLS {
            None
        } else {
            rows.checked_mul(cols).map(|_| Self { rows, cols })
        }
    }

    /// Get the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Compute the total number of cells. Used to allocate storage for the board.
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    /// Convert a linear index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate::new(idx / self.cols, idx % self.cols)
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let cols = self.cols;
        (0..self.rows).map(move |row| (0..cols).map(move |col| Coordinate::new(row, col)))
    }

    /// Iterate every coordinate on the board in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let dim = *self;
        (0..self.total_size()).map(move |idx| dim.un_linearize(idx))
    }

    /// Returns true if the coordinates are the same cell or touch, including
    /// diagonally.
    pub fn is_near(c1: &Coordinate, c2: &Coordinate) -> bool {
        distance(c1.row, c2.row) <= 1 && distance(c1.col, c2.col) <= 1
    }

    /// Parse a label like `"B4"` into a coordinate on this board.
    pub fn parse(&self, label: &str) -> Result<Coordinate, CoordinateError> {
        to_indices(label, self)
    }
}

impl Default for Dimensions {
    /// Construct the default dimensions, a 10x10 board.
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

fn distance(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}

/// Convert a label such as `"B4"` or `" b 04 "` into a [`Coordinate`] on a board with
/// the given dimensions.
pub fn to_indices(label: &str, dim: &Dimensions) -> Result<Coordinate, CoordinateError> {
    static LABEL: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\s*(?P<col>[A-Za-z])\s*(?P<row>[0-9]+)\s*$").unwrap());

    let captures = LABEL
        .captures(label)
        .ok_or_else(|| CoordinateError::Malformed(label.to_owned()))?;
    let out_of_bounds = || CoordinateError::OutOfBounds {
        label: label.to_owned(),
        dim: *dim,
    };

    let letter = captures["col"].as_bytes()[0].to_ascii_uppercase();
    let col = (letter - b'A') as usize;
    // Rows too long to fit in a usize are certainly off the board.
    let row = captures["row"]
        .parse::<usize>()
        .map_err(|_| out_of_bounds())?
        .checked_sub(1)
        .ok_or_else(out_of_bounds)?;

    let coord = Coordinate::new(row, col);
    if dim.contains(&coord) {
        Ok(coord)
    } else {
        Err(out_of_bounds())
    }
}

/// Convert a [`Coordinate`] into its canonical label.
pub fn to_label(coord: Coordinate) -> String {
    coord.to_string()
}
