use std::time::{Duration, Instant};

/// Deadline-based source of game ticks.  The owner asks how long it may wait
/// for input before the next tick is due, and calls [`Ticker::fire()`] once
/// that time has passed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    /// `None` while suspended
    next_tick: Option<Instant>,
}

impl Ticker {
    /// Create a suspended ticker
    pub(crate) fn new(period: Duration) -> Ticker {
        Ticker {
            period,
            next_tick: None,
        }
    }

    /// Start (or restart) ticking every `period`, with the first tick one
    /// period after `now`
    pub(crate) fn start(&mut self, period: Duration, now: Instant) {
        self.period = period;
        self.next_tick = Some(now + period);
    }

    /// Stop ticking until the next call to [`Ticker::start()`]
    pub(crate) fn suspend(&mut self) {
        self.next_tick = None;
    }

    /// Change the tick period.  If ticking, the next tick is rescheduled to
    /// one new period after `now`.
    pub(crate) fn set_period(&mut self, period: Duration, now: Instant) {
        self.period = period;
        if self.next_tick.is_some() {
            self.next_tick = Some(now + period);
        }
    }

    pub(crate) fn period(&self) -> Duration {
        self.period
    }

    /// Return how long until the next tick is due, or `None` if suspended
    pub(crate) fn wait(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|when| when.saturating_duration_since(now))
    }

    /// If a tick is due at `now`, schedule the one after it and return
    /// `true`
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(when) if when <= now => {
                self.next_tick = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}
