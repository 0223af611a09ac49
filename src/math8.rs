use embassy_time::Duration;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16; // a * 65536
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    ); // (b - a) * amount_of_b * 257
    partial = partial.wrapping_add(0x8000); // + 32768 for rounding

    (partial >> 16) as u8
}

/// Convert a unit factor (0.0-1.0) to an 8-bit scale, clamping out-of-range input
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    libm::roundf(value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Convert an 8-bit scale to a unit factor
#[inline]
pub fn to_unit(value: u8) -> f32 {
    f32::from(value) / 255.0
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smoothstep over 0.0-1.0
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Duration as fractional seconds
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn as_secs_f32(duration: Duration) -> f32 {
    duration.as_micros() as f32 / 1_000_000.0
}

/// Fractional seconds as a duration, negative input saturating to zero
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn from_secs_f32(secs: f32) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::from_micros(0);
    }
    Duration::from_micros(libm::roundf(secs * 1_000_000.0) as u64)
}
