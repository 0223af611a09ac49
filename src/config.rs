//! Startup configuration
//!
//! Loaded once and never changed afterwards. [`DEFAULT_CONFIG`] mirrors the
//! shipped menorah: blue wax, red/orange/yellow flames, five brightness steps.

use embassy_time::Duration;

use crate::color::{Rgbw, rgbw};
use crate::error::ConfigError;
use crate::flame::FlickerStyle;
use crate::gesture::Direction;
use crate::lighting::LightingOrder;
use crate::strip::{CANDLE_COUNT, LEDS_PER_STRIP};

/// Candle burn timing
#[derive(Debug, Clone, Copy)]
pub struct BurnConfig {
    /// Nominal burn time of a candle
    pub base_duration: Duration,
    /// Each candle burns `base_duration * (1 ± variation)`, 0.0 <= variation < 1.0
    pub variation: f32,
}

/// Pixel geometry of a candle
#[derive(Debug, Clone, Copy)]
pub struct CandleLayout {
    /// Wax pixels of a fresh candle
    pub base_wax_leds: u8,
    /// Flame height when the candle is lit
    pub flame_start_leds: u8,
    /// Flame height at the end of the burn
    pub flame_max_leds: u8,
}

/// Flame animation tuning
#[derive(Debug, Clone, Copy)]
pub struct FlameConfig {
    /// Lowest flame level (0-255)
    pub min_brightness: u8,
    /// Highest flame level (0-255)
    pub max_brightness: u8,
    /// Animation speed multiplier, 1.0 = normal
    pub speed: f32,
    /// Per-candle speed spread, `speed * (1 ± speed_variation)`
    pub speed_variation: f32,
    pub style: FlickerStyle,
}

/// Colors and their relative levels
#[derive(Debug, Clone, Copy)]
pub struct CandleColors {
    pub wax: Rgbw,
    /// Wax level under a burning flame
    pub wax_scale: u8,
    /// Wax level of a placed but unlit candle
    pub unlit_scale: u8,
    /// Terminal pixel of a burned-out candle
    pub ember: Rgbw,
    pub ember_scale: u8,
    /// Flame colors, cycled in order
    pub flame_palette: &'static [Rgbw],
    /// White flicker layer blended over the flame
    pub highlight: Rgbw,
    /// Steady shamash color
    pub shamash: Rgbw,
}

/// Global brightness steps
#[derive(Debug, Clone, Copy)]
pub struct BrightnessConfig {
    /// Scale of each level (0-255), dimmest first
    pub levels: &'static [u8],
    pub initial_level: usize,
}

/// Candle lighting sequence
#[derive(Debug, Clone, Copy)]
pub struct LightingConfig {
    pub order: LightingOrder,
    /// Minimum time between two lit candles
    pub interval: Duration,
}

/// Which physical gesture plays which role
///
/// While lighting, every direction lights the next candle.
#[derive(Debug, Clone, Copy)]
pub struct GestureMapping {
    /// Next night while selecting
    pub increase: Direction,
    /// Previous night while selecting
    pub decrease: Direction,
    /// Accept the selected night
    pub confirm: Direction,
    /// One brightness level up while burning
    pub brighter: Direction,
    /// One brightness level down while burning
    pub dimmer: Direction,
    /// Minimum time between two accepted gestures
    pub debounce: Duration,
}

#[derive(Debug, Clone, Copy)]
pub struct MenorahConfig {
    /// Must equal [`LEDS_PER_STRIP`]
    pub leds_per_strip: usize,
    pub frame_duration: Duration,
    /// Night shown when selection starts (1..=8)
    pub initial_night: u8,
    /// Skip selection and lighting, burn all candles from the first frame
    pub test_mode: bool,
    pub burn: BurnConfig,
    pub layout: CandleLayout,
    pub flame: FlameConfig,
    pub colors: CandleColors,
    pub brightness: BrightnessConfig,
    pub lighting: LightingConfig,
    pub gestures: GestureMapping,
}

const FLAME_RED: Rgbw = rgbw(255, 5, 5, 50);
const FLAME_ORANGE: Rgbw = rgbw(255, 30, 5, 80);
const FLAME_YELLOW: Rgbw = rgbw(255, 70, 5, 120);
const FLAME_WHITE: Rgbw = rgbw(150, 100, 50, 255);
const WAX_BLUE: Rgbw = rgbw(10, 10, 255, 10);
const WARM_WHITE: Rgbw = rgbw(255, 50, 5, 180);

const DEFAULT_FLAME_PALETTE: [Rgbw; 3] = [FLAME_RED, FLAME_ORANGE, FLAME_YELLOW];

/// 1%, 6%, 20%, 50%, 99%
const DEFAULT_BRIGHTNESS_LEVELS: [u8; 5] = [3, 15, 51, 128, 252];

pub const DEFAULT_CONFIG: MenorahConfig = MenorahConfig {
    leds_per_strip: LEDS_PER_STRIP,
    frame_duration: Duration::from_millis(20),
    initial_night: 4,
    test_mode: false,
    burn: BurnConfig {
        base_duration: Duration::from_secs(45 * 60),
        variation: 0.10,
    },
    layout: CandleLayout {
        base_wax_leds: 5,
        flame_start_leds: 3,
        flame_max_leds: 5,
    },
    flame: FlameConfig {
        min_brightness: 128,
        max_brightness: 204,
        speed: 0.5,
        speed_variation: 0.2,
        style: FlickerStyle::Chaotic,
    },
    colors: CandleColors {
        wax: WAX_BLUE,
        wax_scale: 82,
        unlit_scale: 61,
        ember: WAX_BLUE,
        ember_scale: 204,
        flame_palette: &DEFAULT_FLAME_PALETTE,
        highlight: FLAME_WHITE,
        shamash: WARM_WHITE,
    },
    brightness: BrightnessConfig {
        levels: &DEFAULT_BRIGHTNESS_LEVELS,
        initial_level: 2,
    },
    lighting: LightingConfig {
        order: LightingOrder::Reverse,
        interval: Duration::from_secs(1),
    },
    gestures: GestureMapping {
        increase: Direction::Up,
        decrease: Direction::Down,
        confirm: Direction::Right,
        brighter: Direction::Up,
        dimmer: Direction::Down,
        debounce: Duration::from_millis(500),
    },
};

impl Default for MenorahConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

impl MenorahConfig {
    /// Check every field, reporting the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leds_per_strip != LEDS_PER_STRIP {
            return Err(ConfigError::PixelCount {
                expected: LEDS_PER_STRIP,
                found: self.leds_per_strip,
            });
        }
        if self.frame_duration.as_ticks() == 0 {
            return Err(ConfigError::ZeroFrameDuration);
        }
        if !(1..=CANDLE_COUNT).contains(&usize::from(self.initial_night)) {
            return Err(ConfigError::NightOutOfRange(self.initial_night));
        }

        if self.burn.base_duration.as_ticks() == 0 {
            return Err(ConfigError::ZeroBurnDuration);
        }
        if !(0.0..1.0).contains(&self.burn.variation) {
            return Err(ConfigError::VariationOutOfRange);
        }

        let layout = self.layout;
        if layout.base_wax_leds == 0 || usize::from(layout.base_wax_leds) > LEDS_PER_STRIP {
            return Err(ConfigError::WaxHeight(layout.base_wax_leds));
        }
        if layout.flame_start_leds > layout.flame_max_leds
            || usize::from(layout.flame_max_leds) > LEDS_PER_STRIP
        {
            return Err(ConfigError::FlameHeight {
                start: layout.flame_start_leds,
                max: layout.flame_max_leds,
            });
        }
        if usize::from(layout.base_wax_leds) + usize::from(layout.flame_start_leds)
            > LEDS_PER_STRIP
        {
            return Err(ConfigError::CandleTooTall {
                wax: layout.base_wax_leds,
                flame: layout.flame_start_leds,
            });
        }

        let flame = self.flame;
        if flame.min_brightness > flame.max_brightness {
            return Err(ConfigError::FlameBrightness {
                min: flame.min_brightness,
                max: flame.max_brightness,
            });
        }
        if flame.speed.is_nan()
            || flame.speed <= 0.0
            || !(0.0..1.0).contains(&flame.speed_variation)
        {
            return Err(ConfigError::AnimationSpeed);
        }
        if self.colors.flame_palette.is_empty() {
            return Err(ConfigError::EmptyFlamePalette);
        }

        let levels = self.brightness.levels.len();
        if levels == 0 {
            return Err(ConfigError::NoBrightnessLevels);
        }
        if self.brightness.initial_level >= levels {
            return Err(ConfigError::BrightnessLevelOutOfRange {
                level: self.brightness.initial_level,
                levels,
            });
        }

        let gestures = self.gestures;
        if gestures.increase == gestures.decrease || gestures.increase == gestures.confirm {
            return Err(ConfigError::GestureConflict(gestures.increase));
        }
        if gestures.decrease == gestures.confirm {
            return Err(ConfigError::GestureConflict(gestures.decrease));
        }
        if gestures.brighter == gestures.dimmer {
            return Err(ConfigError::GestureConflict(gestures.brighter));
        }

        Ok(())
    }
}
