use super::board::Cell;
use super::direction::Heading;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// The cells are stored head first.  The snake is never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, with the head at the front
    pub(super) cells: VecDeque<Cell>,

    /// The direction in which the snake last moved (or, before its first
    /// move, the direction it starts out facing)
    pub(super) heading: Heading,
}

impl Snake {
    /// Create a one-cell snake at `head` facing in `heading`
    pub(crate) fn new(head: Cell, heading: Heading) -> Snake {
        Snake {
            cells: VecDeque::from([head]),
            heading,
        }
    }

    pub(crate) fn head(&self) -> Cell {
        self.cells.front().copied().unwrap_or_else(|| {
            unreachable!("Snake should never be empty");
        })
    }

    pub(crate) fn heading(&self) -> Heading {
        self.heading
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over the snake's cells from head to tail
    pub(crate) fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Does any part of the snake, tail included, occupy `cell`?
    pub(crate) fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Move the head forwards onto `cell`, which the caller has already
    /// computed from `heading`.  The tail is left in place.
    pub(super) fn push_head(&mut self, cell: Cell, heading: Heading) {
        self.cells.push_front(cell);
        self.heading = heading;
    }

    /// Drop the last cell of the tail.  A one-cell snake is left untouched.
    pub(super) fn pop_tail(&mut self) {
        if self.cells.len() > 1 {
            let _ = self.cells.pop_back();
        }
    }
}
