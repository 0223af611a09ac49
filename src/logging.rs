//! Log output
//!
//! The crate logs through the `log` facade only. On ESP32 targets the
//! `esp32-log` feature routes it to the serial console.

/// Install the serial console logger at `Info` level
#[cfg(feature = "esp32-log")]
pub fn init_logger() {
    esp_println::logger::init_logger(log::LevelFilter::Info);
}
