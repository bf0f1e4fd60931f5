use crate::consts;
use std::collections::HashSet;
use std::fmt;

/// A square on the board.  Coordinates are signed so that a step off the
/// edge is representable and can be rejected by [`in_bounds()`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Return the cell offset from this one by `(dx, dy)`
    pub(crate) fn offset(self, dx: i32, dy: i32) -> Cell {
        Cell {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Iterate over this cell and its eight neighbors, including any that lie
    /// off the board
    fn neighborhood(self) -> impl Iterator<Item = Cell> {
        (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| self.offset(dx, dy)))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Is `cell` on the board?
pub(crate) fn in_bounds(cell: Cell) -> bool {
    (0..consts::GRID_SIZE).contains(&cell.x) && (0..consts::GRID_SIZE).contains(&cell.y)
}

/// Iterate over every cell on the board in row-major order
pub(crate) fn cells() -> impl Iterator<Item = Cell> {
    (0..consts::GRID_SIZE).flat_map(|y| (0..consts::GRID_SIZE).map(move |x| Cell { x, y }))
}

/// The total number of cells on the board
pub(crate) fn capacity() -> usize {
    let side = usize::try_from(consts::GRID_SIZE).unwrap_or_default();
    side * side
}

/// Return every on-board cell within one step (orthogonally or diagonally)
/// of any of the given cells, the cells themselves included
pub(crate) fn buffer_zone<I>(cells: I) -> HashSet<Cell>
where
    I: IntoIterator<Item = Cell>,
{
    cells
        .into_iter()
        .flat_map(Cell::neighborhood)
        .filter(|&c| in_bounds(c))
        .collect()
}
