//! Phases of the evening and what a gesture means in each of them

use crate::config::GestureMapping;
use crate::gesture::Direction;

/// Top-level phase; only moves forward until a restart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Choosing how many candles to light
    Selecting,
    /// Lighting candles one gesture at a time
    Lighting,
    /// Candles burn down; gestures adjust brightness
    Burning,
    /// Every lit candle burned out; display frozen
    Idle,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Selecting => "selecting",
            Self::Lighting => "lighting",
            Self::Burning => "burning",
            Self::Idle => "idle",
        }
    }
}

/// Logical meaning of a gesture tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    IncreaseNight,
    DecreaseNight,
    ConfirmNight,
    LightNext,
    BrightnessUp,
    BrightnessDown,
    Ignore,
}

/// Resolve a directional tick for the given phase
pub fn action_for(phase: Phase, direction: Direction, mapping: &GestureMapping) -> Action {
    match phase {
        Phase::Selecting if direction == mapping.increase => Action::IncreaseNight,
        Phase::Selecting if direction == mapping.decrease => Action::DecreaseNight,
        Phase::Selecting if direction == mapping.confirm => Action::ConfirmNight,
        Phase::Lighting => Action::LightNext,
        Phase::Burning if direction == mapping.brighter => Action::BrightnessUp,
        Phase::Burning if direction == mapping.dimmer => Action::BrightnessDown,
        Phase::Selecting | Phase::Burning | Phase::Idle => Action::Ignore,
    }
}
