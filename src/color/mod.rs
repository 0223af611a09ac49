mod utils;

use smart_leds::{RGBW, White};
pub use utils::{blend_colors, scale_color, scale_color_by};

pub type Rgbw = RGBW<u8>;

/// All channels off
pub const BLACK: Rgbw = rgbw(0, 0, 0, 0);

/// Build a color from separate red, green, blue and white channels
pub const fn rgbw(r: u8, g: u8, b: u8, w: u8) -> Rgbw {
    Rgbw {
        r,
        g,
        b,
        a: White(w),
    }
}
