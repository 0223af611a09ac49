//! Gesture events and the sensor-facing source trait

use core::fmt;

use crate::channel::GestureReceiver;

const RAW_NONE: u8 = 0x00;
const RAW_UP: u8 = 0x01;
const RAW_DOWN: u8 = 0x02;
const RAW_LEFT: u8 = 0x03;
const RAW_RIGHT: u8 = 0x04;

/// Raw gesture as decoded by the proximity sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Gesture {
    #[default]
    None = RAW_NONE,
    Up = RAW_UP,
    Down = RAW_DOWN,
    Left = RAW_LEFT,
    Right = RAW_RIGHT,
}

/// Direction of a non-empty gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Gesture {
    /// Decode the sensor's gesture register value
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            RAW_NONE => Self::None,
            RAW_UP => Self::Up,
            RAW_DOWN => Self::Down,
            RAW_LEFT => Self::Left,
            RAW_RIGHT => Self::Right,
            _ => return None,
        })
    }

    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::None => None,
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
        }
    }
}

impl From<Direction> for Gesture {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }
}

/// The gesture sensor is absent or stopped responding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorUnavailable;

impl fmt::Display for SensorUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("gesture sensor unavailable")
    }
}

impl core::error::Error for SensorUnavailable {}

/// Source of raw gestures
///
/// Implement this trait for the sensor driver. `poll` is called once per frame
/// and must return within the frame budget.
pub trait GestureSource {
    /// Check the sensor once at startup
    fn probe(&mut self) -> Result<(), SensorUnavailable> {
        Ok(())
    }

    /// Read the next gesture, `Gesture::None` when nothing happened
    fn poll(&mut self) -> Result<Gesture, SensorUnavailable>;
}

/// Gesture source fed through a [`GestureChannel`](crate::channel::GestureChannel)
pub struct ChannelGestureSource<'a, const SIZE: usize> {
    receiver: GestureReceiver<'a, SIZE>,
    available: bool,
}

impl<'a, const SIZE: usize> ChannelGestureSource<'a, SIZE> {
    pub const fn new(receiver: GestureReceiver<'a, SIZE>) -> Self {
        Self {
            receiver,
            available: true,
        }
    }
}

impl<const SIZE: usize> GestureSource for ChannelGestureSource<'_, SIZE> {
    fn probe(&mut self) -> Result<(), SensorUnavailable> {
        if self.available {
            Ok(())
        } else {
            Err(SensorUnavailable)
        }
    }

    fn poll(&mut self) -> Result<Gesture, SensorUnavailable> {
        if !self.available {
            return Err(SensorUnavailable);
        }
        let report = self.receiver.try_receive();
        if report.is_err() {
            self.available = false;
        }
        report
    }
}
