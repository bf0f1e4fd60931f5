use super::board::{self, Cell};
use super::direction::Heading;
use super::placement::{obstacle_count, Obstacle, Placer};
use super::score::Scoreboard;
use super::snake::Snake;
use super::speed::SpeedCurve;
use crate::consts;
use rand::Rng;
use std::time::Duration;

/// The pieces on the board during a single game, from start until the snake
/// crashes
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Session {
    pub(super) snake: Snake,

    /// The direction the snake will move in on the next tick
    pub(super) pending: Heading,

    /// `None` only once the snake has filled every cell it can reach
    pub(super) food: Option<Cell>,

    pub(super) obstacles: Vec<Obstacle>,

    /// Current time between ticks
    pub(super) period: Duration,
}

impl Session {
    /// Start a new game: a one-cell snake at
    /// [`START_CELL`][consts::START_CELL], plus freshly-placed food and
    /// obstacles
    pub(crate) fn new<R: Rng>(placer: &mut Placer<R>, curve: &SpeedCurve) -> Session {
        let mut session = Session {
            snake: Snake::new(consts::START_CELL, consts::START_HEADING),
            pending: consts::START_HEADING,
            food: None,
            obstacles: Vec::new(),
            period: curve.initial(),
        };
        session.respawn(placer, obstacle_count(0));
        session
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<Cell> {
        self.food
    }

    pub(crate) fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub(crate) fn period(&self) -> Duration {
        self.period
    }

    /// Request that the snake move in `heading` on the next tick, replacing
    /// any previous request.  A request to double back, whether against the
    /// snake's last move or against the pending request, is ignored.
    /// Returns `true` if the request was accepted.
    pub(crate) fn turn(&mut self, heading: Heading) -> bool {
        if heading.is_reverse_of(self.pending) || heading.is_reverse_of(self.snake.heading()) {
            false
        } else {
            self.pending = heading;
            true
        }
    }

    /// Move the snake forwards one cell.
    ///
    /// On a collision, the snake is left where it was.  Moving onto the
    /// current tail cell counts as a collision even though the tail would
    /// have moved out of the way.
    pub(crate) fn tick<R: Rng>(
        &mut self,
        placer: &mut Placer<R>,
        scores: &mut Scoreboard,
        curve: &SpeedCurve,
    ) -> TickOutcome {
        let heading = self.pending;
        let head = heading.advance(self.snake.head());
        if !board::in_bounds(head) {
            return TickOutcome::Collided(Collision::Wall);
        }
        if self.snake.occupies(head) {
            return TickOutcome::Collided(Collision::Snake);
        }
        if self.obstacles.iter().any(|ob| ob.cell == head) {
            return TickOutcome::Collided(Collision::Obstacle);
        }
        self.snake.push_head(head, heading);
        if self.food == Some(head) {
            let score = scores.record_food();
            self.period = curve.after_food(self.period);
            self.respawn(placer, obstacle_count(score));
            if self.food.is_none() {
                return TickOutcome::Exhausted;
            }
            TickOutcome::Ate {
                score,
                period: self.period,
            }
        } else {
            self.snake.pop_tail();
            TickOutcome::Moved
        }
    }

    /// Put the food somewhere new and replace all of the obstacles.  If
    /// there's nowhere to put the food, `food` is set to `None` and the
    /// obstacles are left alone.
    fn respawn<R: Rng>(&mut self, placer: &mut Placer<R>, obstacle_qty: usize) {
        self.food = placer.place_food(&self.snake);
        if let Some(food) = self.food {
            self.obstacles = placer.place_obstacles(obstacle_qty, &self.snake, food);
            log::debug!(
                "Food placed at {food}; obstacle ids now {:?}",
                self.obstacles.iter().map(|ob| ob.id).collect::<Vec<_>>()
            );
        }
    }
}

/// What happened on a tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    /// The snake moved into an empty cell
    Moved,

    /// The snake ate the food, bringing the score to `score` and the time
    /// between ticks to `period`
    Ate { score: u32, period: Duration },

    /// The snake ran into something and the game is over
    Collided(Collision),

    /// The snake ate the food, but there is nowhere left to put a new one,
    /// so the game is over
    Exhausted,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    Wall,
    Snake,
    Obstacle,
}
