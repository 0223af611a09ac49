//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::config::MenorahConfig;
use crate::controller::MenorahController;
use crate::error::Error;
use crate::gesture::GestureSource;
use crate::StripSink;

/// Frames of backlog tolerated before the schedule is reset to now.
const MAX_DRIFT_FRAMES: u32 = 2;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Polls the gesture source once per frame
/// - Runs the controller and writes all nine strips to the sink
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::start(&DEFAULT_CONFIG, seed, sensor, strips)?;
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<G: GestureSource, S: StripSink> {
    source: G,
    sink: S,
    controller: MenorahController,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<G: GestureSource, S: StripSink> FrameScheduler<G, S> {
    /// Create a new frame scheduler around a built controller.
    ///
    /// Probes the gesture source once; a missing sensor disables input but
    /// the candles keep rendering.
    pub fn new(mut controller: MenorahController, mut source: G, sink: S) -> Self {
        if source.probe().is_err() {
            controller.sensor_unavailable();
        }
        Self {
            frame_duration: controller.frame_duration(),
            source,
            sink,
            controller,
            next_frame: Instant::from_millis(0),
        }
    }

    /// Validate `config`, build the controller and the scheduler.
    pub fn start(config: &MenorahConfig, seed: u64, source: G, sink: S) -> Result<Self, Error> {
        let controller = MenorahController::new(config, seed)?;
        Ok(Self::new(controller, source, sink))
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Polls the gesture source and updates the controller
    /// 3. Writes every strip to the sink
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after a long stall instead of bursting to catch up
        let max_drift = self.frame_duration * MAX_DRIFT_FRAMES;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let report = self.source.poll();
        let frame = self.controller.update(report, now);
        for (strip, pixels) in frame.strips() {
            self.sink.write(strip, pixels);
        }

        self.next_frame += self.frame_duration;

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: self.next_frame.saturating_duration_since(now),
        }
    }

    /// `Err(Error::SensorUnavailable)` once gesture input has been lost.
    pub fn health(&self) -> Result<(), Error> {
        if self.controller.is_input_stalled() {
            Err(Error::SensorUnavailable)
        } else {
            Ok(())
        }
    }

    /// Get a reference to the controller.
    pub fn controller(&self) -> &MenorahController {
        &self.controller
    }

    /// Get a mutable reference to the controller.
    pub fn controller_mut(&mut self) -> &mut MenorahController {
        &mut self.controller
    }

    /// Get a reference to the strip sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
