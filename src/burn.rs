//! Burn-down of candle wax over each candle's randomized lifetime
//!
//! Wax height follows an eased curve from the configured base height down to a
//! single pixel, then drops to zero the instant the burn time is used up.

use embassy_time::Duration;
use rand::Rng;

use crate::candle::{CandleState, CandleStatus};
use crate::config::{BurnConfig, CandleLayout};
use crate::math8::{as_secs_f32, from_secs_f32, lerp, smoothstep};

/// Last wax pixel before burn-out
const MIN_WAX_HEIGHT: f32 = 1.0;

/// Outcome of one simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnStep {
    /// Candle is not burning
    Unchanged,
    Burning,
    /// Burn time ran out on this step
    BurnedOut,
}

/// Fraction of `target` covered by `elapsed`, clamped to 0.0-1.0
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn progress(elapsed: Duration, target: Duration) -> f32 {
    let target = target.as_ticks();
    if target == 0 {
        return 1.0;
    }
    let ratio = elapsed.as_ticks() as f64 / target as f64;
    (ratio as f32).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy)]
pub struct BurnDownSimulator {
    base_duration: Duration,
    variation: f32,
    base_wax: f32,
}

impl BurnDownSimulator {
    pub fn new(burn: &BurnConfig, layout: &CandleLayout) -> Self {
        Self {
            base_duration: burn.base_duration,
            variation: burn.variation,
            base_wax: f32::from(layout.base_wax_leds),
        }
    }

    /// Wax height of a fresh candle
    pub const fn base_wax(&self) -> f32 {
        self.base_wax
    }

    /// Draw a burn time of `base * (1 ± variation)`
    pub fn draw_duration<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let spread = if self.variation > 0.0 {
            rng.gen_range(-self.variation..=self.variation)
        } else {
            0.0
        };
        let duration = from_secs_f32(as_secs_f32(self.base_duration) * (1.0 + spread));
        duration.max(Duration::from_millis(1))
    }

    /// Wax height of a burning candle at `progress`
    ///
    /// Starts at the base height and eases down to one pixel. The drop to zero
    /// at burn-out is applied by [`advance`](Self::advance).
    pub fn wax_height(&self, progress: f32) -> f32 {
        let remaining = 1.0 - smoothstep(progress);
        lerp(MIN_WAX_HEIGHT, self.base_wax, remaining).max(MIN_WAX_HEIGHT)
    }

    /// Advance a burning candle by `dt`
    pub fn advance(&self, candle: &mut CandleState, dt: Duration) -> BurnStep {
        if candle.status != CandleStatus::Burning {
            return BurnStep::Unchanged;
        }

        candle.elapsed = (candle.elapsed + dt).min(candle.target_duration);
        if candle.elapsed >= candle.target_duration {
            candle.wax_height = 0.0;
            candle.status = CandleStatus::BurnedOut;
            return BurnStep::BurnedOut;
        }

        let height = self.wax_height(progress(candle.elapsed, candle.target_duration));
        candle.wax_height = candle.wax_height.min(height);
        BurnStep::Burning
    }
}
