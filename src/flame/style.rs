const STYLE_NAME_WAVE: &str = "wave";
const STYLE_NAME_PULSE: &str = "pulse";
const STYLE_NAME_CHAOTIC: &str = "chaotic";
const STYLE_NAME_FLOW: &str = "flow";
const STYLE_NAME_BURSTS: &str = "bursts";
const STYLE_NAME_RIPPLE: &str = "ripple";
const STYLE_NAME_DOUBLE_WAVE: &str = "double_wave";
const STYLE_NAME_SPIRAL: &str = "spiral";
const STYLE_NAME_LAYERED: &str = "layered";

const STYLE_ID_WAVE: u8 = 0;
const STYLE_ID_PULSE: u8 = 1;
const STYLE_ID_CHAOTIC: u8 = 2;
const STYLE_ID_FLOW: u8 = 3;
const STYLE_ID_BURSTS: u8 = 4;
const STYLE_ID_RIPPLE: u8 = 5;
const STYLE_ID_DOUBLE_WAVE: u8 = 6;
const STYLE_ID_SPIRAL: u8 = 7;
const STYLE_ID_LAYERED: u8 = 8;

/// Flicker pattern of a flame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FlickerStyle {
    /// Slow sine sway, brightness wave travelling up the flame
    Wave = STYLE_ID_WAVE,
    /// Height breathing, bright pulses moving up
    Pulse = STYLE_ID_PULSE,
    /// Several overlapping frequencies, irregular
    #[default]
    Chaotic = STYLE_ID_CHAOTIC,
    /// Bright band rolling upward with a broader height swing
    Flow = STYLE_ID_FLOW,
    /// Occasional bright spots spawned at the base, rising and fading
    Bursts = STYLE_ID_BURSTS,
    /// Long, slow ripple with widely spaced peaks
    Ripple = STYLE_ID_RIPPLE,
    /// Two offset waves travelling together
    DoubleWave = STYLE_ID_DOUBLE_WAVE,
    /// Rotating brightness pattern
    Spiral = STYLE_ID_SPIRAL,
    /// Slow wave and medium pulse layered
    Layered = STYLE_ID_LAYERED,
}

impl FlickerStyle {
    pub const ALL: [Self; 9] = [
        Self::Wave,
        Self::Pulse,
        Self::Chaotic,
        Self::Flow,
        Self::Bursts,
        Self::Ripple,
        Self::DoubleWave,
        Self::Spiral,
        Self::Layered,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            STYLE_ID_WAVE => Self::Wave,
            STYLE_ID_PULSE => Self::Pulse,
            STYLE_ID_CHAOTIC => Self::Chaotic,
            STYLE_ID_FLOW => Self::Flow,
            STYLE_ID_BURSTS => Self::Bursts,
            STYLE_ID_RIPPLE => Self::Ripple,
            STYLE_ID_DOUBLE_WAVE => Self::DoubleWave,
            STYLE_ID_SPIRAL => Self::Spiral,
            STYLE_ID_LAYERED => Self::Layered,
            _ => return None,
        })
    }

    /// Style `offset` places after `self`, wrapping around
    pub const fn cycled(self, offset: usize) -> Self {
        Self::ALL[(self as usize + offset) % Self::ALL.len()]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wave => STYLE_NAME_WAVE,
            Self::Pulse => STYLE_NAME_PULSE,
            Self::Chaotic => STYLE_NAME_CHAOTIC,
            Self::Flow => STYLE_NAME_FLOW,
            Self::Bursts => STYLE_NAME_BURSTS,
            Self::Ripple => STYLE_NAME_RIPPLE,
            Self::DoubleWave => STYLE_NAME_DOUBLE_WAVE,
            Self::Spiral => STYLE_NAME_SPIRAL,
            Self::Layered => STYLE_NAME_LAYERED,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            STYLE_NAME_WAVE => Some(Self::Wave),
            STYLE_NAME_PULSE => Some(Self::Pulse),
            STYLE_NAME_CHAOTIC => Some(Self::Chaotic),
            STYLE_NAME_FLOW => Some(Self::Flow),
            STYLE_NAME_BURSTS => Some(Self::Bursts),
            STYLE_NAME_RIPPLE => Some(Self::Ripple),
            STYLE_NAME_DOUBLE_WAVE => Some(Self::DoubleWave),
            STYLE_NAME_SPIRAL => Some(Self::Spiral),
            STYLE_NAME_LAYERED => Some(Self::Layered),
            _ => None,
        }
    }
}
