mod board;
mod direction;
mod placement;
mod score;
mod session;
mod snake;
mod speed;
pub(crate) use self::board::Cell;
pub(crate) use self::direction::Heading;
pub(crate) use self::placement::ObstacleKind;
pub(crate) use self::score::FinalScore;
pub(crate) use self::session::{Collision, Session, TickOutcome};
pub(crate) use self::speed::{SpeedCurve, SpeedCurveError};
use self::placement::Placer;
use self::score::Scoreboard;
use crate::command::Command;
use rand::Rng;
use std::time::Duration;

/// The game proper: whether a game is under way, and if so, its pieces &
/// progress.  Input arrives via [`Game::handle_command()`]; time passes via
/// [`Game::tick()`].  Both return a value describing what the owner of the
/// tick schedule needs to do in response.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R> {
    placer: Placer<R>,
    scores: Scoreboard,
    curve: SpeedCurve,
    state: GameState,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(curve: SpeedCurve, rng: R) -> Game<R> {
        Game {
            placer: Placer::new(rng),
            scores: Scoreboard::default(),
            curve,
            state: GameState::Idle,
        }
    }

    /// Respond to a command from the player.  Commands that mean nothing in
    /// the current state are ignored.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Effect {
        let GameState::Playing {
            ref mut session,
            ref mut status,
        } = self.state
        else {
            return if cmd == Command::Enter {
                self.start()
            } else {
                Effect::Ignored
            };
        };
        match (*status, cmd) {
            (Status::Running, Command::Space) => {
                log::debug!("Game paused");
                *status = Status::Paused;
                Effect::Paused
            }
            (Status::Running, _) => {
                if let Some(heading) = cmd.heading() {
                    if session.turn(heading) {
                        return Effect::Turned(heading);
                    }
                }
                Effect::Ignored
            }
            (Status::Paused, Command::Space) => {
                log::debug!("Game resumed");
                *status = Status::Running;
                Effect::Resumed(session.period())
            }
            (Status::Over(_), Command::Space | Command::Enter) => self.start(),
            (Status::Over(_), Command::Esc) => {
                self.state = GameState::Idle;
                Effect::Exited
            }
            _ => Effect::Ignored,
        }
    }

    /// Advance the game by one step.  Returns `None` if no game is running.
    pub(crate) fn tick(&mut self) -> Option<TickOutcome> {
        let GameState::Playing {
            ref mut session,
            ref mut status,
        } = self.state
        else {
            return None;
        };
        if *status != Status::Running {
            return None;
        }
        let outcome = session.tick(&mut self.placer, &mut self.scores, &self.curve);
        let cause = match outcome {
            TickOutcome::Moved => return Some(outcome),
            TickOutcome::Ate { score, period } => {
                log::debug!(
                    "Food eaten; score is now {score}, tick period is now {} ms",
                    period.as_millis()
                );
                return Some(outcome);
            }
            TickOutcome::Collided(collision) => Cause::Collision(collision),
            TickOutcome::Exhausted => Cause::Exhausted,
        };
        let result = self.scores.record_game_over();
        log::info!(
            "Game over ({cause:?}) with score {} and snake length {}{}",
            result.score,
            session.snake().len(),
            if result.new_best { " (new best)" } else { "" }
        );
        *status = Status::Over(Ending { cause, result });
        Some(outcome)
    }

    fn start(&mut self) -> Effect {
        self.scores.reset();
        let session = Session::new(&mut self.placer, &self.curve);
        let period = session.period();
        log::info!(
            "Starting new game; best score so far is {}",
            self.scores.best()
        );
        self.state = GameState::Playing {
            session,
            status: Status::Running,
        };
        Effect::Started(period)
    }
}

impl<R> Game<R> {
    /// Pause the game if it is running, as when the terminal loses focus
    pub(crate) fn suspend(&mut self) -> Effect {
        if let GameState::Playing {
            status: ref mut status @ Status::Running,
            ..
        } = self.state
        {
            log::debug!("Game paused on loss of focus");
            *status = Status::Paused;
            Effect::Paused
        } else {
            Effect::Ignored
        }
    }

    /// Return a read-only view of everything a renderer needs
    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        let (session, status) = match self.state {
            GameState::Idle => (None, None),
            GameState::Playing {
                ref session,
                status,
            } => (Some(session), Some(status)),
        };
        Snapshot {
            session,
            status,
            score: self.scores.score(),
            best: self.scores.best(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum GameState {
    /// No game has been started, or the player left the last one
    Idle,
    Playing {
        session: Session,
        status: Status,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    Running,
    Paused,
    Over(Ending),
}

/// How a game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ending {
    pub(crate) cause: Cause,
    pub(crate) result: FinalScore,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Cause {
    Collision(Collision),
    /// There was nowhere left to put the food
    Exhausted,
}

/// What the owner of the tick schedule should do after a command
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Effect {
    /// Nothing changed
    Ignored,

    /// The snake will head this way on the next tick
    Turned(Heading),

    /// A new game began; tick every given period, starting now
    Started(Duration),

    /// Stop ticking until resumed
    Paused,

    /// Start ticking again every given period
    Resumed(Duration),

    /// The player left a finished game for the title screen
    Exited,
}

/// Read-only state for rendering
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot<'a> {
    /// `None` before the first game and after exiting a finished game
    pub(crate) session: Option<&'a Session>,
    /// `Some` whenever `session` is
    pub(crate) status: Option<Status>,
    pub(crate) score: u32,
    pub(crate) best: u32,
}

impl Snapshot<'_> {
    pub(crate) fn paused(&self) -> bool {
        self.status == Some(Status::Paused)
    }

    pub(crate) fn ending(&self) -> Option<Ending> {
        match self.status {
            Some(Status::Over(ending)) => Some(ending),
            _ => None,
        }
    }
}
