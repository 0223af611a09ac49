use smart_leds::White;

use crate::color::Rgbw;
use crate::math8::{blend8, scale8, unit8};

/// Blend two RGBW colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgbw, b: Rgbw, amount_of_b: u8) -> Rgbw {
    Rgbw {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
        a: White(blend8(a.a.0, b.a.0, amount_of_b)),
    }
}

/// Scale every channel, white included (0-255 = 0.0-1.0)
#[inline]
pub const fn scale_color(color: Rgbw, scale: u8) -> Rgbw {
    Rgbw {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
        a: White(scale8(color.a.0, scale)),
    }
}

/// Scale every channel by a unit factor, clamped to 0.0-1.0
#[inline]
pub fn scale_color_by(color: Rgbw, factor: f32) -> Rgbw {
    scale_color(color, unit8(factor))
}
