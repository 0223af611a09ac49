//! Lighting candles one at a time

use embassy_time::{Duration, Instant};
use heapless::Vec;

use crate::strip::CANDLE_COUNT;

#[allow(clippy::cast_possible_truncation)]
const LAST_CANDLE: u8 = CANDLE_COUNT as u8;

/// Which end of the menorah is lit first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingOrder {
    /// Candle 1 first
    Forward,
    /// Candle 8 first
    Reverse,
}

/// Hands out the next candle to light for the confirmed night.
///
/// Never lights more than `night` candles and never two within `interval`.
/// The interval also runs from the moment lighting starts, so the gesture
/// that confirmed the night cannot light a candle as well.
#[derive(Debug, Clone)]
pub struct CandleLightingSequencer {
    order: LightingOrder,
    night: u8,
    lit: u8,
    interval: Duration,
    last_lit: Instant,
}

impl CandleLightingSequencer {
    pub fn new(order: LightingOrder, night: u8, interval: Duration, started_at: Instant) -> Self {
        Self {
            order,
            night: night.clamp(1, LAST_CANDLE),
            lit: 0,
            interval,
            last_lit: started_at,
        }
    }

    /// Candle number (1..=8) lit at `position` (0-based) of the sequence
    pub const fn candle_at(&self, position: u8) -> u8 {
        match self.order {
            LightingOrder::Forward => position + 1,
            LightingOrder::Reverse => LAST_CANDLE - position,
        }
    }

    /// Candles taking part tonight, in lighting order
    pub fn placed(&self) -> Vec<u8, CANDLE_COUNT> {
        (0..self.night).map(|position| self.candle_at(position)).collect()
    }

    pub const fn night(&self) -> u8 {
        self.night
    }

    pub const fn lit_count(&self) -> u8 {
        self.lit
    }

    pub const fn is_complete(&self) -> bool {
        self.lit >= self.night
    }

    /// Advance to the next candle
    ///
    /// Returns `None` when every candle is lit or the previous one (or the
    /// start of lighting) was less than `interval` ago.
    pub fn light_next(&mut self, now: Instant) -> Option<u8> {
        if self.is_complete() {
            return None;
        }
        if now.saturating_duration_since(self.last_lit) < self.interval {
            return None;
        }

        let candle = self.candle_at(self.lit);
        self.lit += 1;
        self.last_lit = now;
        Some(candle)
    }
}
