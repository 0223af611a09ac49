//! Interrupt-safe queue of raw sensor reports.
//!
//! The gesture sensor is usually serviced from an interrupt or a separate task,
//! while the control loop only polls once per frame. Reports are buffered in a
//! `heapless::Deque` guarded by a `critical-section` mutex. When the queue is
//! full the oldest report is dropped: a stale swipe is worth less than a new one.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::gesture::{Gesture, SensorUnavailable};

/// What the sensor side can tell the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorReport {
    /// A decoded gesture
    Gesture(Gesture),
    /// The sensor stopped responding or was never found
    Lost,
}

struct QueueState<const SIZE: usize> {
    reports: Deque<SensorReport, SIZE>,
    dropped: u32,
}

/// Bounded report queue shared between the sensor side and the control loop.
pub struct GestureChannel<const SIZE: usize> {
    inner: Mutex<RefCell<QueueState<SIZE>>>,
}

impl<const SIZE: usize> GestureChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(QueueState {
                reports: Deque::new(),
                dropped: 0,
            })),
        }
    }

    /// Handle for the sensor side.
    pub const fn sender(&self) -> GestureSender<'_, SIZE> {
        GestureSender { channel: self }
    }

    /// Handle for the control loop.
    pub const fn receiver(&self) -> GestureReceiver<'_, SIZE> {
        GestureReceiver { channel: self }
    }

    /// Queue a report, evicting the oldest one if the queue is full.
    ///
    /// `Gesture::None` is not queued.
    pub fn push(&self, report: SensorReport) {
        if report == SensorReport::Gesture(Gesture::None) {
            return;
        }
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            if state.reports.is_full() {
                state.reports.pop_front();
                state.dropped = state.dropped.saturating_add(1);
            }
            // Cannot fail: a slot was freed above if the queue was full.
            let _ = state.reports.push_back(report);
        })
    }

    /// Take the oldest queued report, if any.
    pub fn pop(&self) -> Option<SensorReport> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().reports.pop_front())
    }

    /// Number of reports evicted because the queue was full.
    pub fn dropped(&self) -> u32 {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().dropped)
    }
}

impl<const SIZE: usize> Default for GestureChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender handle for a [`GestureChannel`].
#[derive(Clone, Copy)]
pub struct GestureSender<'a, const SIZE: usize> {
    channel: &'a GestureChannel<SIZE>,
}

impl<const SIZE: usize> GestureSender<'_, SIZE> {
    /// Queue a decoded gesture.
    pub fn send(&self, gesture: Gesture) {
        self.channel.push(SensorReport::Gesture(gesture));
    }

    /// Report that the sensor is gone.
    pub fn report_lost(&self) {
        self.channel.push(SensorReport::Lost);
    }
}

/// Receiver handle for a [`GestureChannel`].
#[derive(Clone, Copy)]
pub struct GestureReceiver<'a, const SIZE: usize> {
    channel: &'a GestureChannel<SIZE>,
}

impl<const SIZE: usize> GestureReceiver<'_, SIZE> {
    /// Take the next report without blocking.
    ///
    /// An empty queue reads as `Gesture::None`.
    pub fn try_receive(&self) -> Result<Gesture, SensorUnavailable> {
        match self.channel.pop() {
            Some(SensorReport::Gesture(gesture)) => Ok(gesture),
            Some(SensorReport::Lost) => Err(SensorUnavailable),
            None => Ok(Gesture::None),
        }
    }
}
