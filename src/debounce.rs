//! Rate limiting of raw gestures into ticks

use embassy_time::{Duration, Instant};

use crate::gesture::{Direction, Gesture, SensorUnavailable};

/// A debounced directional gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureTick {
    pub direction: Direction,
    pub at: Instant,
}

/// Collapses bursts of raw gestures into at most one tick per interval.
///
/// `Gesture::None` never produces a tick and does not restart the interval.
/// Once the source reports the sensor unavailable the debouncer stalls and
/// stays silent; there is no recovery short of a restart.
#[derive(Debug, Clone)]
pub struct GestureDebouncer {
    interval: Duration,
    last_accepted: Option<Instant>,
    stalled: bool,
}

impl GestureDebouncer {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
            stalled: false,
        }
    }

    /// Stop emitting ticks for good
    pub fn stall(&mut self) {
        self.stalled = true;
    }

    pub const fn is_stalled(&self) -> bool {
        self.stalled
    }

    /// Feed one polled report
    ///
    /// Returns a tick when the gesture is directional and the interval since the
    /// last accepted tick has elapsed.
    pub fn feed(
        &mut self,
        report: Result<Gesture, SensorUnavailable>,
        now: Instant,
    ) -> Option<GestureTick> {
        if self.stalled {
            return None;
        }
        let gesture = match report {
            Ok(gesture) => gesture,
            Err(SensorUnavailable) => {
                self.stall();
                return None;
            }
        };
        let direction = gesture.direction()?;

        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.interval {
                return None;
            }
        }

        self.last_accepted = Some(now);
        Some(GestureTick { direction, at: now })
    }
}
