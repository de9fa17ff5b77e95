// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Straight-line ship geometry.
use std::collections::HashSet;

use crate::{coordinate::Coordinate, ships::Orientation};

/// Returns true if the cells are distinct and each one is an orthogonal neighbor of the
/// previous one along a single row or column.
pub(super) fn is_line(cells: &[Coordinate]) -> bool {
    let mut iter = cells.iter();
    let start = match iter.next() {
        Some(start) => start,
        None => return false,
    };
    let mut visited = HashSet::with_capacity(cells.len());
    visited.insert(start);
    let mut previous = start;
    for coord in iter {
        if is_step(previous, coord) && is_colinear(start, previous, coord) && visited.insert(coord)
        {
            previous = coord;
        } else {
            return false;
        }
    }
    true
}

/// Build the run of cells between two ends, inclusive, ordered from the top-left end.
/// Returns `None` if the ends do not share a row or a column.
pub(super) fn span(a: Coordinate, b: Coordinate) -> Option<Vec<Coordinate>> {
    let (first, last) = if a <= b { (a, b) } else { (b, a) };
    if first.row == last.row {
        Some(
            (first.col..=last.col)
                .map(|col| Coordinate::new(first.row, col))
                .collect(),
        )
    } else if first.col == last.col {
        Some(
            (first.row..=last.row)
                .map(|row| Coordinate::new(row, first.col))
                .collect(),
        )
    } else {
        None
    }
}

/// Build `len` cells starting at `start` and moving right or down.
pub(super) fn extend(start: Coordinate, len: usize, orientation: Orientation) -> Vec<Coordinate> {
    (0..len)
        .map(|offset| match orientation {
            Orientation::Horizontal => Coordinate::new(start.row, start.col + offset),
            Orientation::Vertical => Coordinate::new(start.row + offset, start.col),
        })
        .collect()
}

fn is_step(a: &Coordinate, b: &Coordinate) -> bool {
    let drow = if a.row > b.row { a.row - b.row } else { b.row - a.row };
    let dcol = if a.col > b.col { a.col - b.col } else { b.col - a.col };
    drow + dcol == 1
}

fn is_colinear(c1: &Coordinate, c2: &Coordinate, c3: &Coordinate) -> bool {
    let difrow = c1.row != c2.row || c2.row != c3.row;
    let difcol = c1.col != c2.col || c2.col != c3.col;
    !(difrow && difcol)
}
