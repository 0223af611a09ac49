use crate::color::{BLACK, Rgbw};
use crate::strip::{CANDLE_COUNT, StripPixels};

#[allow(clippy::cast_possible_truncation)]
const MAX_NIGHT: u8 = CANDLE_COUNT as u8;

/// Night count chooser, 1..=8 with wrap-around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightSelector {
    night: u8,
}

impl NightSelector {
    /// Out-of-range input is clamped into 1..=8
    pub fn new(night: u8) -> Self {
        Self {
            night: night.clamp(1, MAX_NIGHT),
        }
    }

    pub const fn night(&self) -> u8 {
        self.night
    }

    /// 8 wraps to 1
    pub fn increase(&mut self) {
        self.night = (self.night % MAX_NIGHT) + 1;
    }

    /// 1 wraps to 8
    pub fn decrease(&mut self) {
        self.night = if self.night <= 1 {
            MAX_NIGHT
        } else {
            self.night - 1
        };
    }

    /// Show the count as lit pixels from the bottom of the shamash
    pub fn render(&self, color: Rgbw, pixels: &mut StripPixels) {
        for (i, pixel) in pixels.iter_mut().enumerate() {
            *pixel = if i < usize::from(self.night) {
                color
            } else {
                BLACK
            };
        }
    }
}
