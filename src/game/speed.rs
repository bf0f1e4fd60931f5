use crate::consts;
use std::time::Duration;
use thiserror::Error;

/// How the time between snake movements evolves over the course of a game:
/// it starts at `initial` and shrinks by `step` per food eaten, but never
/// drops below `minimum`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SpeedCurve {
    initial: Duration,
    step: Duration,
    minimum: Duration,
}

impl SpeedCurve {
    pub(crate) fn new(
        initial: Duration,
        step: Duration,
        minimum: Duration,
    ) -> Result<SpeedCurve, SpeedCurveError> {
        if initial.is_zero() || minimum.is_zero() {
            Err(SpeedCurveError::ZeroPeriod)
        } else if minimum > initial {
            Err(SpeedCurveError::MinimumAboveInitial { minimum, initial })
        } else {
            Ok(SpeedCurve {
                initial,
                step,
                minimum,
            })
        }
    }

    pub(crate) fn initial(&self) -> Duration {
        self.initial
    }

    pub(crate) fn step(&self) -> Duration {
        self.step
    }

    pub(crate) fn minimum(&self) -> Duration {
        self.minimum
    }

    /// Return the tick period that follows `current` once a food is eaten
    pub(crate) fn after_food(&self, current: Duration) -> Duration {
        current.saturating_sub(self.step).max(self.minimum)
    }
}

impl Default for SpeedCurve {
    fn default() -> SpeedCurve {
        SpeedCurve {
            initial: consts::INITIAL_TICK_PERIOD,
            step: consts::TICK_PERIOD_STEP,
            minimum: consts::MIN_TICK_PERIOD,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum SpeedCurveError {
    #[error("tick periods must be nonzero")]
    ZeroPeriod,
    #[error("minimum tick period ({minimum:?}) exceeds initial tick period ({initial:?})")]
    MinimumAboveInitial {
        minimum: Duration,
        initial: Duration,
    },
}
