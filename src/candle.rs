use embassy_time::Duration;

use crate::burn::progress;
use crate::flame::Flicker;

/// Lifecycle of a candle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleStatus {
    Unlit,
    /// Lit during the lighting phase, burn timer not yet running
    LitPending,
    Burning,
    /// Terminal; only the ember pixel remains
    BurnedOut,
}

impl CandleStatus {
    /// Lit at some point tonight
    pub const fn is_lit(self) -> bool {
        !matches!(self, Self::Unlit)
    }
}

/// State of one numbered candle
#[derive(Debug, Clone)]
pub struct CandleState {
    pub(crate) status: CandleStatus,
    pub(crate) placed: bool,
    pub(crate) target_duration: Duration,
    pub(crate) elapsed: Duration,
    pub(crate) wax_height: f32,
    pub(crate) flicker: Flicker,
}

impl CandleState {
    /// Fresh, unplaced, unlit candle with `wax_height` pixels of wax
    pub fn new(wax_height: f32) -> Self {
        Self {
            status: CandleStatus::Unlit,
            placed: false,
            target_duration: Duration::from_ticks(0),
            elapsed: Duration::from_ticks(0),
            wax_height,
            flicker: Flicker::dormant(),
        }
    }

    pub const fn status(&self) -> CandleStatus {
        self.status
    }

    /// Taking part tonight
    pub const fn is_placed(&self) -> bool {
        self.placed
    }

    pub const fn target_duration(&self) -> Duration {
        self.target_duration
    }

    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Remaining wax in pixels, never increases
    pub const fn wax_height(&self) -> f32 {
        self.wax_height
    }

    pub const fn flicker_seed(&self) -> u64 {
        self.flicker.seed()
    }

    pub const fn flicker(&self) -> &Flicker {
        &self.flicker
    }

    /// Burn progress 0.0-1.0; zero until the timer runs
    pub fn progress(&self) -> f32 {
        match self.status {
            CandleStatus::Unlit | CandleStatus::LitPending => 0.0,
            CandleStatus::Burning => progress(self.elapsed, self.target_duration),
            CandleStatus::BurnedOut => 1.0,
        }
    }

    pub fn place(&mut self) {
        self.placed = true;
    }

    /// `Unlit` -> `LitPending`; returns false if the candle was already lit
    pub fn light(&mut self, target_duration: Duration, flicker: Flicker) -> bool {
        if self.status != CandleStatus::Unlit {
            return false;
        }
        self.placed = true;
        self.status = CandleStatus::LitPending;
        self.target_duration = target_duration;
        self.elapsed = Duration::from_ticks(0);
        self.flicker = flicker;
        true
    }

    /// `LitPending` -> `Burning`; returns false for any other status
    pub fn start_burning(&mut self) -> bool {
        if self.status != CandleStatus::LitPending {
            return false;
        }
        self.status = CandleStatus::Burning;
        true
    }
}
