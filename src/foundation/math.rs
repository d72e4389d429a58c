use crate::foundation::core::TimeRange;

/// Convert a computed coordinate to a pixel index.
///
/// Floors toward negative infinity and saturates at the `i64` limits. NaN maps to `i64::MIN` so
/// that it always lands off canvas instead of on row/column zero.
pub(crate) fn to_px(v: f64) -> i64 {
    if v.is_nan() { i64::MIN } else { v.floor() as i64 }
}

/// Linear mapping of an absolute time onto `[0, width)` for the given range.
pub(crate) fn time_to_x(range: TimeRange, width: u32, t: f64) -> i64 {
    to_px(f64::from(width) * (t - f64::from(range.min)) / range.span())
}

/// Pixel distance for `v` seconds on a log2 axis with `scale` pixels per doubling.
///
/// `v <= 0` has no logarithm; the result saturates and must be treated as off canvas.
pub(crate) fn log2_px(scale: f64, v: f64) -> i64 {
    to_px(scale * v.log2())
}

/// Grid spacing for a log2 axis, never less than one pixel.
pub(crate) fn doubling_step(scale: f64) -> i64 {
    to_px(scale).max(1)
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
