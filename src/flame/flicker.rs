use core::f32::consts::{PI, TAU};

use embassy_time::Duration;
use heapless::Vec;
use libm::{cosf, fabsf, floorf, fmodf, sinf};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128StarStar;

use super::FlickerStyle;
use crate::math8::as_secs_f32;

/// Animation steps per second at speed 1.0
const ANIMATION_RATE: f32 = 50.0;

const WHITE_BASE: f32 = 0.15;
const WHITE_MAX: f32 = 0.35;
const WHITE_JITTER: f32 = 0.02;
const LEVEL_JITTER: f32 = 0.03;
const COLOR_DRIFT: f32 = 0.03;

const TAPER: f32 = 0.5;
const MIN_LED_FACTOR: f32 = 0.4;

/// Live bursts at once; spawn rate and lifetime keep it at two or fewer
const MAX_BURSTS: usize = 4;
/// A spawn roll happens once per this many animation steps
const BURST_SPAWN_STEPS: f32 = 25.0;
const BURST_SPAWN_CHANCE: f64 = 0.2;
/// Burst rise per animation step, in pixels
const BURST_RISE: f32 = 0.18;
/// Bursts vanish once this far above the base
const BURST_TOP: f32 = 6.0;
/// Bursts below this height lift the flame
const BURST_LIFT_BELOW: f32 = 3.0;
const BURST_REACH: f32 = 1.5;

/// Keep `value` in `0.0..modulus`
#[inline]
fn wrap(value: f32, modulus: f32) -> f32 {
    let rem = fmodf(value, modulus);
    if rem < 0.0 { rem + modulus } else { rem }
}

/// Per-candle flicker state
///
/// Everything random about a flame comes from `seed`, so two candles with
/// different seeds drift apart while the same seed replays the same flame.
#[derive(Debug, Clone)]
pub struct Flicker {
    seed: u64,
    rng: Xoroshiro128StarStar,
    style: FlickerStyle,
    phase_offset: f32,
    speed: f32,
    /// Animation steps since ignition
    clock: f32,
    /// Heights of rising bursts, pixels above the flame base
    bursts: Vec<f32, MAX_BURSTS>,
}

impl Flicker {
    pub fn new(seed: u64, style: FlickerStyle, speed: f32, speed_variation: f32) -> Self {
        let mut rng = Xoroshiro128StarStar::seed_from_u64(seed);
        let phase_offset = rng.gen_range(0.0..TAU);
        let spread = if speed_variation > 0.0 {
            rng.gen_range(-speed_variation..=speed_variation)
        } else {
            0.0
        };

        Self {
            seed,
            rng,
            style,
            phase_offset,
            speed: speed * (1.0 + spread),
            clock: 0.0,
            bursts: Vec::new(),
        }
    }

    /// Placeholder for a candle that was never lit
    pub(crate) fn dormant() -> Self {
        Self::new(0, FlickerStyle::default(), 1.0, 0.0)
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub const fn style(&self) -> FlickerStyle {
        self.style
    }

    /// Move the animation forward by `dt` and sample it
    pub fn advance(&mut self, dt: Duration, palette_len: usize) -> FlickerSample {
        let steps = as_secs_f32(dt) * ANIMATION_RATE * self.speed;
        let previous = self.clock;
        self.clock += steps;
        if self.style == FlickerStyle::Bursts {
            self.advance_bursts(previous, steps);
        }
        self.sample(palette_len)
    }

    fn advance_bursts(&mut self, previous: f32, steps: f32) {
        for height in &mut self.bursts {
            *height += BURST_RISE * steps;
        }
        self.bursts.retain(|height| *height < BURST_TOP);

        let window = |clock: f32| floorf(clock / BURST_SPAWN_STEPS);
        if window(self.clock) > window(previous) && self.rng.gen_bool(BURST_SPAWN_CHANCE) {
            // Full only if the spawn rate changes; a dropped burst is harmless
            let _ = self.bursts.push(0.0);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample(&mut self, palette_len: usize) -> FlickerSample {
        let t = self.clock;
        let phi = self.phase_offset;

        let white = WHITE_BASE
            + 0.12 * sinf(t * 0.08 + phi)
            + 0.08 * sinf(t * 0.15 + phi * 1.7)
            + 0.05 * sinf(t * 0.25 + phi * 2.3)
            + self.rng.gen_range(-WHITE_JITTER..=WHITE_JITTER);

        let cycle = (palette_len.max(1) * 2) as f32;
        let palette_position = wrap(t * COLOR_DRIFT + phi, cycle) / 2.0;

        let height_offset = match self.style {
            FlickerStyle::Wave => sinf(t * 0.1 + phi),
            FlickerStyle::Pulse => 2.0 * sinf(t * 0.15 + phi),
            FlickerStyle::Chaotic => {
                let h = wrap(t * 0.18 + phi, 15.0);
                (0.8 * sinf(h) + 0.6 * sinf(h * 2.3)) / 2.0
            }
            FlickerStyle::Flow => {
                let h = wrap(t * 0.128 + phi, 9.0);
                2.0 * sinf(h * PI / 4.5)
            }
            FlickerStyle::Bursts => {
                let lift = self
                    .bursts
                    .iter()
                    .filter(|height| **height < BURST_LIFT_BELOW)
                    .count() as f32;
                0.8 * lift + 0.5 * sinf(t * 0.08 + phi)
            }
            FlickerStyle::Ripple => sinf(t * 0.08 + phi),
            FlickerStyle::DoubleWave => {
                (sinf(t * 0.12 + phi) + sinf(t * 0.12 + phi + PI / 2.0)) / 2.0
            }
            FlickerStyle::Spiral => {
                let h = wrap(t * 0.105 + phi, 12.0);
                sinf(h * TAU / 12.0)
            }
            FlickerStyle::Layered => {
                (1.2 * sinf(t * 0.04 + phi) + 1.6 * sinf(t * 0.154 + phi * 1.5)) / 2.0
            }
        };

        FlickerSample {
            style: self.style,
            clock: t,
            phase_offset: phi,
            bursts: self.bursts.clone(),
            white: white.clamp(0.0, WHITE_MAX),
            palette_position,
            height_offset,
            level_jitter: self.rng.gen_range(-LEVEL_JITTER..=LEVEL_JITTER),
        }
    }
}

/// One animation step of a flame
#[derive(Debug, Clone)]
pub struct FlickerSample {
    style: FlickerStyle,
    clock: f32,
    phase_offset: f32,
    bursts: Vec<f32, MAX_BURSTS>,
    /// Highlight blend amount, 0.0-0.35
    pub white: f32,
    /// Position in the flame palette, fractional part blends to the next entry
    pub palette_position: f32,
    /// Flame height swing in pixels
    pub height_offset: f32,
    /// Relative level jitter, ±3%
    pub level_jitter: f32,
}

impl FlickerSample {
    /// Level factor of flame pixel `index` (0 = bottom) in a flame `height` tall
    ///
    /// Tapers towards the tip, with the style's travelling modulation on top.
    /// Never exceeds 1.0.
    #[allow(clippy::cast_precision_loss)]
    pub fn led_factor(&self, index: usize, height: usize) -> f32 {
        let t = self.clock;
        let phi = self.phase_offset;
        let i = index as f32;
        let taper = 1.0 - i * TAPER / (height.saturating_sub(1).max(1) as f32);

        let (modulation, max) = match self.style {
            FlickerStyle::Wave => {
                let phase = wrap(wrap(t * 0.12 + phi, 7.5) - i * 2.2, 7.5);
                (0.1 * sinf(phase * PI / 3.75), 1.1)
            }
            FlickerStyle::Pulse => {
                let phase = wrap(wrap(t * 0.25 + phi, 12.0) - i * 3.5, 12.0);
                ((0.15 * sinf(phase * PI / 6.0)).max(0.0), 1.15)
            }
            FlickerStyle::Chaotic => {
                let c = wrap(t * 0.18 - i * 2.5 + phi, 12.0);
                let value = 0.08 * sinf(c) + 0.06 * sinf(c * 2.1) + 0.04 * sinf(c * 3.3);
                (value / 3.0, 1.15)
            }
            FlickerStyle::Flow => {
                let phase = wrap(wrap(t * 0.16 + phi, 7.5) - i * 2.3, 7.5);
                let boost = if phase < 3.0 {
                    0.15 * (0.5 + 0.5 * cosf(phase * PI / 3.0))
                } else {
                    0.0
                };
                (boost, 1.15)
            }
            FlickerStyle::Bursts => {
                let boost = self
                    .bursts
                    .iter()
                    .map(|height| fabsf(i - height))
                    .filter(|distance| *distance < BURST_REACH)
                    .map(|distance| 0.2 * (0.5 + 0.5 * cosf(distance * PI / BURST_REACH)))
                    .sum::<f32>();
                (boost, 1.2)
            }
            FlickerStyle::Ripple => {
                let phase = wrap(wrap(t * 0.1 + phi, 15.0) - i * 4.5, 15.0);
                (0.12 * sinf(phase * PI / 7.5), 1.12)
            }
            FlickerStyle::DoubleWave => {
                let first = wrap(t * 0.14 + phi, 7.5);
                let second = wrap(t * 0.14 + phi + 3.6, 7.5);
                let a = 0.1 * sinf(wrap(first - i * 2.2, 7.5) * PI / 3.75);
                let b = 0.1 * sinf(wrap(second - i * 2.2, 7.5) * PI / 3.75);
                ((a + b) / 2.0, 1.1)
            }
            FlickerStyle::Spiral => {
                let phase = wrap(wrap(t * 0.15 + phi, 10.5) - i * 2.8, 10.5);
                (0.15 * sinf(phase * TAU / 10.5), 1.15)
            }
            FlickerStyle::Layered => {
                let slow = wrap(wrap(t * 0.08 + phi, 7.5) - i * 2.2, 7.5);
                let fast = wrap(wrap(t * 0.22 + phi * 1.5, 10.5) - i * 3.2, 10.5);
                let value = 0.08 * sinf(slow * PI / 3.75) + 0.1 * sinf(fast * PI / 5.25);
                (value / 2.0, 1.15)
            }
        };

        (taper + modulation).clamp(MIN_LED_FACTOR, max).min(1.0)
    }
}
