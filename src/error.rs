use core::fmt;

use crate::gesture::{Direction, SensorUnavailable};

/// Rejected startup configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Strips must have exactly eight pixels
    PixelCount { expected: usize, found: usize },
    ZeroFrameDuration,
    /// Initial night outside 1..=8
    NightOutOfRange(u8),
    ZeroBurnDuration,
    /// Burn variation outside 0.0..1.0
    VariationOutOfRange,
    /// Wax height outside 1..=8
    WaxHeight(u8),
    /// Flame start above max, or max taller than the strip
    FlameHeight { start: u8, max: u8 },
    /// Fresh wax plus the starting flame does not fit on a strip
    CandleTooTall { wax: u8, flame: u8 },
    FlameBrightness { min: u8, max: u8 },
    /// Non-positive speed or speed variation outside 0.0..1.0
    AnimationSpeed,
    EmptyFlamePalette,
    NoBrightnessLevels,
    BrightnessLevelOutOfRange { level: usize, levels: usize },
    /// Two roles of the same phase share one direction
    GestureConflict(Direction),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelCount { expected, found } => {
                write!(f, "expected {expected} pixels per strip, found {found}")
            }
            Self::ZeroFrameDuration => f.write_str("frame duration must be non-zero"),
            Self::NightOutOfRange(night) => write!(f, "initial night {night} outside 1..=8"),
            Self::ZeroBurnDuration => f.write_str("burn duration must be non-zero"),
            Self::VariationOutOfRange => f.write_str("burn variation must be in 0.0..1.0"),
            Self::WaxHeight(height) => write!(f, "wax height {height} outside 1..=8"),
            Self::FlameHeight { start, max } => {
                write!(f, "invalid flame height {start}..={max}")
            }
            Self::CandleTooTall { wax, flame } => {
                write!(f, "wax {wax} plus flame {flame} taller than the strip")
            }
            Self::FlameBrightness { min, max } => {
                write!(f, "flame brightness min {min} above max {max}")
            }
            Self::AnimationSpeed => f.write_str("invalid flame animation speed"),
            Self::EmptyFlamePalette => f.write_str("flame palette is empty"),
            Self::NoBrightnessLevels => f.write_str("no brightness levels"),
            Self::BrightnessLevelOutOfRange { level, levels } => {
                write!(f, "brightness level {level} out of {levels}")
            }
            Self::GestureConflict(direction) => {
                write!(f, "gesture {direction:?} mapped to two roles")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Everything the controller can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input is disabled; rendering continues
    SensorUnavailable,
    /// Fatal at startup
    InvalidConfiguration(ConfigError),
}

impl From<SensorUnavailable> for Error {
    fn from(_: SensorUnavailable) -> Self {
        Self::SensorUnavailable
    }
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Self::InvalidConfiguration(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SensorUnavailable => fmt::Display::fmt(&SensorUnavailable, f),
            Self::InvalidConfiguration(error) => write!(f, "invalid configuration: {error}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::SensorUnavailable => None,
            Self::InvalidConfiguration(error) => Some(error),
        }
    }
}
