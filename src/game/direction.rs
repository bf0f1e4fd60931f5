use super::board::Cell;

/// The direction in which the snake travels.  `Up` is towards row 0.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Heading {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Heading {
    /// Return the cell one step from `cell` in this direction.  The result
    /// may lie outside the board.
    pub(crate) fn advance(self, cell: Cell) -> Cell {
        match self {
            Heading::Up => cell.offset(0, -1),
            Heading::Down => cell.offset(0, 1),
            Heading::Left => cell.offset(-1, 0),
            Heading::Right => cell.offset(1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    pub(crate) fn is_reverse_of(self, other: Heading) -> bool {
        self.reverse() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Heading::Up, Cell::new(2, 7), Cell::new(2, 6))]
    #[case(Heading::Down, Cell::new(2, 7), Cell::new(2, 8))]
    #[case(Heading::Left, Cell::new(2, 7), Cell::new(1, 7))]
    #[case(Heading::Right, Cell::new(2, 7), Cell::new(3, 7))]
    #[case(Heading::Up, Cell::new(2, 0), Cell::new(2, -1))]
    #[case(Heading::Down, Cell::new(2, 14), Cell::new(2, 15))]
    #[case(Heading::Left, Cell::new(0, 7), Cell::new(-1, 7))]
    #[case(Heading::Right, Cell::new(14, 7), Cell::new(15, 7))]
    fn test_advance(#[case] h: Heading, #[case] cell: Cell, #[case] r: Cell) {
        assert_eq!(h.advance(cell), r);
    }

    #[rstest]
    #[case(Heading::Up, Heading::Down)]
    #[case(Heading::Down, Heading::Up)]
    #[case(Heading::Left, Heading::Right)]
    #[case(Heading::Right, Heading::Left)]
    fn test_reverse(#[case] h: Heading, #[case] r: Heading) {
        assert_eq!(h.reverse(), r);
        assert!(h.is_reverse_of(r));
        assert!(!h.is_reverse_of(h));
    }
}
