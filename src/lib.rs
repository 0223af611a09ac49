#![no_std]

pub mod brightness;
pub mod burn;
pub mod candle;
pub mod channel;
pub mod color;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod flame;
pub mod frame_scheduler;
pub mod gesture;
pub mod lighting;
pub mod logging;
pub mod math8;
pub mod phase;
pub mod selector;
pub mod strip;

pub use brightness::BrightnessController;
pub use burn::{BurnDownSimulator, BurnStep};
pub use candle::{CandleState, CandleStatus};
pub use channel::{GestureChannel, GestureReceiver, GestureSender, SensorReport};
pub use config::{DEFAULT_CONFIG, MenorahConfig};
pub use controller::MenorahController;
pub use debounce::{GestureDebouncer, GestureTick};
pub use error::{ConfigError, Error};
pub use flame::{FlameAnimator, Flicker, FlickerStyle, intensity_curve};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use gesture::{ChannelGestureSource, Direction, Gesture, GestureSource, SensorUnavailable};
pub use lighting::{CandleLightingSequencer, LightingOrder};
pub use phase::{Action, Phase};
pub use selector::NightSelector;
pub use strip::{CANDLE_COUNT, Frame, LEDS_PER_STRIP, STRIP_COUNT, StripId, StripPixels};

pub use color::Rgbw;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The scheduler writes every strip once per frame.
pub trait StripSink {
    /// Write the pixels of one strip, bottom pixel first
    fn write(&mut self, strip: StripId, pixels: &StripPixels);
}
