use crate::command::Command;
use crate::game::{Effect, Game, SpeedCurve, TickOutcome};
use crate::ticker::Ticker;
use crate::view;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// The running program: a game, the schedule on which it advances, and
/// whether the user has asked to leave
#[derive(Clone, Debug)]
pub(crate) struct App<R> {
    game: Game<R>,
    ticker: Ticker,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(curve: SpeedCurve, rng: R) -> App<R> {
        App {
            game: Game::new_with_rng(curve, rng),
            ticker: Ticker::new(curve.initial()),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| view::draw(frame, self.game.snapshot()))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either an input event or the next tick, whichever comes
    /// first, and respond to it
    fn process_input(&mut self) -> io::Result<()> {
        match self.ticker.wait(Instant::now()) {
            Some(wait) => {
                if poll(wait)? {
                    self.handle_event(read()?, Instant::now());
                }
            }
            None => self.handle_event(read()?, Instant::now()),
        }
        self.tick(Instant::now());
        Ok(())
    }

    fn handle_event(&mut self, event: Event, now: Instant) {
        if event == Event::FocusLost {
            let effect = self.game.suspend();
            self.apply(effect, now);
            return;
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        if matches!(cmd, Command::Quit | Command::Q) {
            log::debug!("Quit requested");
            self.quitting = true;
            return;
        }
        let effect = self.game.handle_command(cmd);
        self.apply(effect, now);
    }

    /// Advance the game if a tick is due
    fn tick(&mut self, now: Instant) {
        if !self.ticker.fire(now) {
            return;
        }
        match self.game.tick() {
            Some(TickOutcome::Ate { period, .. }) if period != self.ticker.period() => {
                self.ticker.set_period(period, now);
            }
            Some(TickOutcome::Collided(_) | TickOutcome::Exhausted) => self.ticker.suspend(),
            Some(TickOutcome::Moved | TickOutcome::Ate { .. }) | None => (),
        }
    }

    fn apply(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::Started(period) | Effect::Resumed(period) => self.ticker.start(period, now),
            Effect::Paused | Effect::Exited => self.ticker.suspend(),
            Effect::Turned(heading) => log::trace!("Snake will turn {heading:?}"),
            Effect::Ignored => (),
        }
    }
}
