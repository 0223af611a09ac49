//! Flame rendering for a single candle strip
//!
//! The strip is drawn bottom-up: wax pixels first, the flame on top of them.
//! Flame level follows [`intensity_curve`] over the burn and flickers through
//! the candle's own [`Flicker`] state.

mod flicker;
mod style;

use embassy_time::Duration;
use libm::{ceilf, floorf, powf, roundf};

pub use flicker::{Flicker, FlickerSample};
pub use style::FlickerStyle;

use crate::candle::{CandleState, CandleStatus};
use crate::color::{BLACK, Rgbw, blend_colors, scale_color, scale_color_by};
use crate::config::{CandleColors, CandleLayout, FlameConfig, MenorahConfig};
use crate::math8::{lerp, to_unit, unit8};
use crate::strip::{LEDS_PER_STRIP, StripPixels};

const CURVE_START: f32 = 0.3;
const CURVE_PEAK_AT: f32 = 0.8;
const CURVE_EXPONENT: f32 = 1.5;

/// Relative flame level over the burn
///
/// Tame 30% start, eases up to full level at 80% of the burn, then simmers
/// down to zero at burn-out.
pub fn intensity_curve(progress: f32) -> f32 {
    if progress <= 0.0 {
        return CURVE_START;
    }
    if progress >= 1.0 {
        return 0.0;
    }
    if progress <= CURVE_PEAK_AT {
        let rise = powf(progress / CURVE_PEAK_AT, CURVE_EXPONENT);
        CURVE_START + (1.0 - CURVE_START) * rise
    } else {
        let fall = powf((progress - CURVE_PEAK_AT) / (1.0 - CURVE_PEAK_AT), CURVE_EXPONENT);
        1.0 - fall
    }
}

/// Renders a candle's wax and flame into its strip
#[derive(Debug, Clone, Copy)]
pub struct FlameAnimator {
    layout: CandleLayout,
    flame: FlameConfig,
    colors: CandleColors,
}

impl FlameAnimator {
    pub const fn new(config: &MenorahConfig) -> Self {
        Self {
            layout: config.layout,
            flame: config.flame,
            colors: config.colors,
        }
    }

    /// Flicker state for a candle lit with `seed`
    pub fn ignite(&self, seed: u64, style: FlickerStyle) -> Flicker {
        Flicker::new(seed, style, self.flame.speed, self.flame.speed_variation)
    }

    /// Draw `candle` after `dt` of animation time
    ///
    /// Colors are unscaled by global brightness.
    pub fn render(&self, candle: &mut CandleState, dt: Duration, pixels: &mut StripPixels) {
        pixels.fill(BLACK);

        match candle.status() {
            CandleStatus::Unlit => {
                if candle.is_placed() {
                    let wax = scale_color(self.colors.wax, self.colors.unlit_scale);
                    let height = usize::from(self.layout.base_wax_leds).min(LEDS_PER_STRIP);
                    pixels[..height].fill(wax);
                }
            }
            CandleStatus::BurnedOut => {
                pixels[0] = scale_color(self.colors.ember, self.colors.ember_scale);
            }
            CandleStatus::LitPending | CandleStatus::Burning => {
                self.render_lit(candle, dt, pixels);
            }
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render_lit(&self, candle: &mut CandleState, dt: Duration, pixels: &mut StripPixels) {
        let sample = candle.flicker.advance(dt, self.colors.flame_palette.len());
        let pending = candle.status() == CandleStatus::LitPending;
        let progress = candle.progress();

        let wax_height = (ceilf(candle.wax_height()).max(1.0) as usize).min(LEDS_PER_STRIP);
        pixels[..wax_height].fill(scale_color(self.colors.wax, self.colors.wax_scale));

        let base_height = lerp(
            f32::from(self.layout.flame_start_leds),
            f32::from(self.layout.flame_max_leds),
            progress,
        );
        let flame_max = f32::from(self.layout.flame_max_leds.max(1));
        let height = (roundf(base_height + sample.height_offset).clamp(1.0, flame_max) as usize)
            .min(LEDS_PER_STRIP - wax_height);

        let level = self.flame_level(pending, progress, sample.level_jitter);
        let color = self.flame_color(&sample);
        for (i, pixel) in pixels[wax_height..wax_height + height].iter_mut().enumerate() {
            *pixel = scale_color_by(color, level * sample.led_factor(i, height));
        }
    }

    /// Unit flame level, always within the configured min/max brightness
    fn flame_level(&self, pending: bool, progress: f32, jitter: f32) -> f32 {
        let min = to_unit(self.flame.min_brightness);
        let max = to_unit(self.flame.max_brightness);
        if pending {
            return min;
        }
        let level = lerp(min, max, intensity_curve(progress));
        (level * (1.0 + jitter)).clamp(min, max)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn flame_color(&self, sample: &FlickerSample) -> Rgbw {
        let palette = self.colors.flame_palette;
        let Some(&first) = palette.first() else {
            return BLACK;
        };
        let floor = floorf(sample.palette_position);
        let index = (floor.max(0.0) as usize) % palette.len();
        let next = palette.get((index + 1) % palette.len()).copied().unwrap_or(first);
        let current = palette.get(index).copied().unwrap_or(first);

        let base = blend_colors(current, next, unit8(sample.palette_position - floor));
        blend_colors(base, self.colors.highlight, unit8(sample.white))
    }
}
