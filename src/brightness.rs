use crate::color::scale_color;
use crate::config::BrightnessConfig;
use crate::strip::Frame;

/// Global brightness, stepped through a fixed list of levels
#[derive(Debug, Clone, Copy)]
pub struct BrightnessController {
    levels: &'static [u8],
    level: usize,
}

impl BrightnessController {
    /// Level index is clamped into range; an empty level list means full scale
    pub fn new(config: &BrightnessConfig) -> Self {
        Self {
            levels: config.levels,
            level: config.initial_level.min(config.levels.len().saturating_sub(1)),
        }
    }

    pub const fn level(&self) -> usize {
        self.level
    }

    pub const fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Scale of the current level (0-255)
    pub fn scale(&self) -> u8 {
        self.levels.get(self.level).copied().unwrap_or(u8::MAX)
    }

    /// One level up; returns false at the top
    pub fn increase(&mut self) -> bool {
        if self.level + 1 >= self.levels.len() {
            return false;
        }
        self.level += 1;
        true
    }

    /// One level down; returns false at the bottom
    pub fn decrease(&mut self) -> bool {
        if self.level == 0 {
            return false;
        }
        self.level -= 1;
        true
    }

    /// Scale every pixel of the frame
    pub fn apply(&self, frame: &mut Frame) {
        let scale = self.scale();
        for pixel in frame.pixels_mut() {
            *pixel = scale_color(*pixel, scale);
        }
    }
}
