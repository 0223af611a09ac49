//! Menorah controller - owns every piece of evening state
//!
//! One [`MenorahController::update`] call per frame: feed the polled gesture,
//! run the active phase, render all nine strips.

use embassy_time::{Duration, Instant};
use log::{debug, info, warn};
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoroshiro128StarStar;

use crate::brightness::BrightnessController;
use crate::burn::{BurnDownSimulator, BurnStep};
use crate::candle::{CandleState, CandleStatus};
use crate::color::Rgbw;
use crate::config::{GestureMapping, LightingConfig, MenorahConfig};
use crate::debounce::{GestureDebouncer, GestureTick};
use crate::error::ConfigError;
use crate::flame::{FlameAnimator, FlickerStyle};
use crate::gesture::{Gesture, SensorUnavailable};
use crate::lighting::CandleLightingSequencer;
use crate::phase::{Action, Phase, action_for};
use crate::selector::NightSelector;
use crate::strip::{CANDLE_COUNT, Frame, StripId};

#[allow(clippy::cast_possible_truncation)]
const ALL_NIGHTS: u8 = CANDLE_COUNT as u8;

pub struct MenorahController {
    // Configuration
    gestures: GestureMapping,
    lighting: LightingConfig,
    shamash: Rgbw,
    style: FlickerStyle,
    frame_duration: Duration,

    // Components
    debouncer: GestureDebouncer,
    selector: NightSelector,
    sequencer: Option<CandleLightingSequencer>,
    simulator: BurnDownSimulator,
    animator: FlameAnimator,
    brightness: BrightnessController,
    rng: Xoroshiro128StarStar,

    // State
    phase: Phase,
    candles: [CandleState; CANDLE_COUNT],
    frame: Frame,
    last_update: Option<Instant>,
    frozen: bool,
}

impl MenorahController {
    /// Build a controller from a validated configuration
    ///
    /// `seed` drives every random draw, so the same seed and input replay the
    /// same evening.
    pub fn new(config: &MenorahConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let simulator = BurnDownSimulator::new(&config.burn, &config.layout);
        let base_wax = simulator.base_wax();
        let mut controller = Self {
            gestures: config.gestures,
            lighting: config.lighting,
            shamash: config.colors.shamash,
            style: config.flame.style,
            frame_duration: config.frame_duration,

            debouncer: GestureDebouncer::new(config.gestures.debounce),
            selector: NightSelector::new(config.initial_night),
            sequencer: None,
            simulator,
            animator: FlameAnimator::new(config),
            brightness: BrightnessController::new(&config.brightness),
            rng: Xoroshiro128StarStar::seed_from_u64(seed),

            phase: Phase::Selecting,
            candles: core::array::from_fn(|_| CandleState::new(base_wax)),
            frame: Frame::new(),
            last_update: None,
            frozen: false,
        };

        if config.test_mode {
            controller.light_all();
        }
        Ok(controller)
    }

    /// Run one frame at `now` with the gesture polled for it
    pub fn update(&mut self, report: Result<Gesture, SensorUnavailable>, now: Instant) -> &Frame {
        let dt = self
            .last_update
            .map_or(Duration::from_ticks(0), |last| now.saturating_duration_since(last));
        self.last_update = Some(now);

        let was_stalled = self.debouncer.is_stalled();
        let tick = self.debouncer.feed(report, now);
        if !was_stalled && self.debouncer.is_stalled() {
            warn!("gesture sensor lost, input disabled");
        }

        if self.frozen {
            return &self.frame;
        }

        // Burn time before the gesture, so candles lit by it start from zero
        self.step(dt);
        if let Some(tick) = tick {
            self.handle_tick(tick);
        }
        self.render(dt);
        if self.phase == Phase::Idle {
            self.frozen = true;
        }
        &self.frame
    }

    /// Apply a debounced gesture to the current phase
    pub fn handle_tick(&mut self, tick: GestureTick) {
        match action_for(self.phase, tick.direction, &self.gestures) {
            Action::IncreaseNight => {
                self.selector.increase();
                debug!("night {}", self.selector.night());
            }
            Action::DecreaseNight => {
                self.selector.decrease();
                debug!("night {}", self.selector.night());
            }
            Action::ConfirmNight => self.start_lighting(tick.at),
            Action::LightNext => self.light_next(tick.at),
            Action::BrightnessUp => {
                if self.brightness.increase() {
                    info!("brightness level {}", self.brightness.level());
                }
            }
            Action::BrightnessDown => {
                if self.brightness.decrease() {
                    info!("brightness level {}", self.brightness.level());
                }
            }
            Action::Ignore => {}
        }
    }

    /// Treat the gesture sensor as gone; the evening continues without input
    pub fn sensor_unavailable(&mut self) {
        if !self.debouncer.is_stalled() {
            warn!("gesture sensor unavailable, input disabled");
            self.debouncer.stall();
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Selected (or confirmed) night count
    pub const fn night(&self) -> u8 {
        self.selector.night()
    }

    /// Candle `n` (1..=8)
    pub fn candle(&self, n: u8) -> Option<&CandleState> {
        self.candles.get(usize::from(n).checked_sub(1)?)
    }

    pub const fn candles(&self) -> &[CandleState; CANDLE_COUNT] {
        &self.candles
    }

    pub const fn brightness(&self) -> &BrightnessController {
        &self.brightness
    }

    /// Last rendered frame
    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    pub const fn is_input_stalled(&self) -> bool {
        self.debouncer.is_stalled()
    }

    fn set_phase(&mut self, phase: Phase) {
        info!("phase {} -> {}", self.phase.as_str(), phase.as_str());
        self.phase = phase;
    }

    fn start_lighting(&mut self, now: Instant) {
        let sequencer = CandleLightingSequencer::new(
            self.lighting.order,
            self.selector.night(),
            self.lighting.interval,
            now,
        );
        for n in sequencer.placed() {
            if let Some(candle) = self.candle_mut(n) {
                candle.place();
            }
        }
        info!("night {} confirmed", sequencer.night());
        self.sequencer = Some(sequencer);
        self.set_phase(Phase::Lighting);
    }

    fn light_next(&mut self, now: Instant) {
        let Some(sequencer) = self.sequencer.as_mut() else {
            return;
        };
        let Some(n) = sequencer.light_next(now) else {
            return;
        };
        let complete = sequencer.is_complete();

        self.light_candle(n, self.style);
        if complete {
            self.start_burning();
        }
    }

    fn light_candle(&mut self, n: u8, style: FlickerStyle) {
        let duration = self.simulator.draw_duration(&mut self.rng);
        let flicker = self.animator.ignite(self.rng.next_u64(), style);
        let Some(candle) = self.candle_mut(n) else {
            return;
        };
        if candle.light(duration, flicker) {
            info!("candle {n} lit, burns for {}s", duration.as_secs());
        }
    }

    fn start_burning(&mut self) {
        for candle in &mut self.candles {
            candle.start_burning();
        }
        self.set_phase(Phase::Burning);
    }

    /// Light every candle and go straight to burning
    fn light_all(&mut self) {
        info!("test mode, lighting all candles");
        self.selector = NightSelector::new(ALL_NIGHTS);
        for (offset, n) in (1..=ALL_NIGHTS).enumerate() {
            self.light_candle(n, self.style.cycled(offset));
        }
        self.start_burning();
    }

    fn candle_mut(&mut self, n: u8) -> Option<&mut CandleState> {
        self.candles.get_mut(usize::from(n).checked_sub(1)?)
    }

    fn step(&mut self, dt: Duration) {
        if self.phase != Phase::Burning {
            return;
        }

        for (n, candle) in (1u8..).zip(self.candles.iter_mut()) {
            if self.simulator.advance(candle, dt) == BurnStep::BurnedOut {
                info!("candle {n} burned out");
            }
        }

        let burned_out = self
            .candles
            .iter()
            .filter(|candle| candle.status().is_lit())
            .all(|candle| candle.status() == CandleStatus::BurnedOut);
        if burned_out {
            self.set_phase(Phase::Idle);
        }
    }

    fn render(&mut self, dt: Duration) {
        let strip = self.frame.shamash_mut();
        if self.phase == Phase::Selecting {
            self.selector.render(self.shamash, strip);
        } else {
            strip.fill(self.shamash);
        }

        for (n, candle) in (1u8..).zip(self.candles.iter_mut()) {
            if let Some(strip) = self.frame.strip_mut(StripId::Candle(n)) {
                self.animator.render(candle, dt, strip);
            }
        }

        self.brightness.apply(&mut self.frame);
    }
}
