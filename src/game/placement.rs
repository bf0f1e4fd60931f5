use super::board::{self, Cell};
use super::snake::Snake;
use crate::consts;
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// The visual variety of an obstacle.  Purely cosmetic; kinds are handed out
/// in rotation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ObstacleKind {
    Rock,
    Crate,
    Bramble,
    Pillar,
}

impl ObstacleKind {
    pub(crate) const PALETTE: [ObstacleKind; 4] = [
        ObstacleKind::Rock,
        ObstacleKind::Crate,
        ObstacleKind::Bramble,
        ObstacleKind::Pillar,
    ];

    /// Return the kind for the `i`-th obstacle of a freshly generated set
    fn nth(i: usize) -> ObstacleKind {
        Self::PALETTE[i % Self::PALETTE.len()]
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Obstacle {
    pub(crate) cell: Cell,
    pub(crate) kind: ObstacleKind,
    /// Identifier unique across every obstacle generated by a given
    /// [`Placer`]; lets a renderer tell regenerated obstacles apart
    pub(crate) id: u64,
}

/// Return the number of obstacles that should be on the board at the given
/// score
pub(crate) fn obstacle_count(score: u32) -> usize {
    let extra = usize::try_from(score / consts::POINTS_PER_OBSTACLE).unwrap_or(usize::MAX);
    consts::MIN_OBSTACLES
        .saturating_add(extra)
        .min(consts::MAX_OBSTACLES)
}

/// Random placement of food & obstacles
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Placer<R> {
    rng: R,
    next_obstacle_id: u64,
}

impl<R: Rng> Placer<R> {
    pub(crate) fn new(rng: R) -> Placer<R> {
        Placer {
            rng,
            next_obstacle_id: 0,
        }
    }

    /// Pick a random on-board cell that is not in `exclude`.
    ///
    /// Cells are first drawn uniformly at random; if
    /// [`PLACEMENT_ATTEMPTS`][consts::PLACEMENT_ATTEMPTS] draws all land in
    /// `exclude`, a free cell is instead chosen uniformly from a scan of the
    /// whole board.  Returns `None` if and only if `exclude` covers the board.
    pub(crate) fn place(&mut self, exclude: &HashSet<Cell>) -> Option<Cell> {
        for _ in 0..consts::PLACEMENT_ATTEMPTS {
            let cell = Cell::new(
                self.rng.random_range(0..consts::GRID_SIZE),
                self.rng.random_range(0..consts::GRID_SIZE),
            );
            if !exclude.contains(&cell) {
                return Some(cell);
            }
        }
        log::debug!(
            "Random placement failed with {} of {} cells excluded; scanning board",
            exclude.len(),
            board::capacity()
        );
        board::cells()
            .filter(|c| !exclude.contains(c))
            .choose(&mut self.rng)
    }

    /// Generate `count` obstacles, none of which lie on a cell in `exclude` or
    /// on each other.  Fewer are returned if the board runs out of room.
    pub(crate) fn generate_obstacles(
        &mut self,
        count: usize,
        exclude: HashSet<Cell>,
    ) -> Vec<Obstacle> {
        let mut obstacles = Vec::with_capacity(count);
        self.fill_obstacles(&mut obstacles, count, exclude);
        obstacles
    }

    /// Choose a cell for the food that keeps clear of the snake and its
    /// buffer zone.  If that's impossible, any cell not under the snake is
    /// used.  Returns `None` when the snake covers the whole board.
    pub(crate) fn place_food(&mut self, snake: &Snake) -> Option<Cell> {
        let strict = board::buffer_zone(snake.cells());
        if let Some(cell) = self.place(&strict) {
            return Some(cell);
        }
        log::warn!("No room for food outside the snake's buffer zone; ignoring buffer");
        let relaxed = snake.cells().collect::<HashSet<_>>();
        self.place(&relaxed)
    }

    /// Generate `count` obstacles that keep clear of the snake, its buffer
    /// zone, and the food.  If the board is too crowded for that, the buffer
    /// zone is given up on, and if it's still too crowded, fewer obstacles
    /// are generated.
    pub(crate) fn place_obstacles(
        &mut self,
        count: usize,
        snake: &Snake,
        food: Cell,
    ) -> Vec<Obstacle> {
        let mut strict = board::buffer_zone(snake.cells());
        strict.insert(food);
        let mut obstacles = self.generate_obstacles(count, strict);
        if obstacles.len() < count {
            log::warn!(
                "Only {} of {count} obstacles fit outside the snake's buffer zone; ignoring buffer",
                obstacles.len()
            );
            let relaxed = snake.cells().chain([food]).collect::<HashSet<_>>();
            self.fill_obstacles(&mut obstacles, count, relaxed);
            if obstacles.len() < count {
                log::warn!("Board is full; placed {} of {count} obstacles", obstacles.len());
            }
        }
        obstacles
    }

    fn fill_obstacles(
        &mut self,
        obstacles: &mut Vec<Obstacle>,
        count: usize,
        mut exclude: HashSet<Cell>,
    ) {
        exclude.extend(obstacles.iter().map(|ob| ob.cell));
        while obstacles.len() < count {
            let Some(cell) = self.place(&exclude) else {
                return;
            };
            exclude.insert(cell);
            let kind = ObstacleKind::nth(obstacles.len());
            let id = self.next_obstacle_id;
            self.next_obstacle_id += 1;
            obstacles.push(Obstacle { cell, kind, id });
        }
    }
}
