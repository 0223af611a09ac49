//! Strip identities and the per-frame pixel buffers
//!
//! Pixel 0 of every strip is the bottom of the candle.

use crate::color::{BLACK, Rgbw};

/// Pixels on every strip
pub const LEDS_PER_STRIP: usize = 8;

/// Numbered candles, not counting the shamash
pub const CANDLE_COUNT: usize = 8;

/// Shamash plus the numbered candles
pub const STRIP_COUNT: usize = CANDLE_COUNT + 1;

/// Pixel buffer of a single strip, bottom first
pub type StripPixels = [Rgbw; LEDS_PER_STRIP];

/// Identity of a strip
///
/// The shamash is strip 0, `Candle(n)` is strip `n` for `n` in 1..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripId {
    Shamash,
    Candle(u8),
}

impl StripId {
    /// Strip index in 0..=8, `None` for a candle number outside 1..=8
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Shamash => Some(0),
            Self::Candle(n @ 1..=8) => Some(n as usize),
            Self::Candle(_) => None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Shamash),
            1..=CANDLE_COUNT => Some(Self::Candle(index as u8)),
            _ => None,
        }
    }
}

/// One rendered frame for all nine strips
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    strips: [StripPixels; STRIP_COUNT],
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            strips: [[BLACK; LEDS_PER_STRIP]; STRIP_COUNT],
        }
    }

    pub fn strip(&self, id: StripId) -> Option<&StripPixels> {
        id.index().and_then(|index| self.strips.get(index))
    }

    pub fn strip_mut(&mut self, id: StripId) -> Option<&mut StripPixels> {
        id.index().and_then(|index| self.strips.get_mut(index))
    }

    pub const fn shamash(&self) -> &StripPixels {
        &self.strips[0]
    }

    pub const fn shamash_mut(&mut self) -> &mut StripPixels {
        &mut self.strips[0]
    }

    /// Pixels of candle `n`, `None` unless `n` is in 1..=8
    pub fn candle(&self, n: u8) -> Option<&StripPixels> {
        self.strip(StripId::Candle(n))
    }

    /// Iterate strips in index order
    pub fn strips(&self) -> impl Iterator<Item = (StripId, &StripPixels)> {
        self.strips
            .iter()
            .enumerate()
            .filter_map(|(index, pixels)| StripId::from_index(index).map(|id| (id, pixels)))
    }

    /// Iterate every pixel of every strip mutably
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Rgbw> {
        self.strips.iter_mut().flat_map(|strip| strip.iter_mut())
    }
}
