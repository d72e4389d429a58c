use crate::canvas::surface::Rgba8;
use crate::foundation::config::{BG, MAX_C16, SATURATED};

/// Add `delta` to a channel, clamping at [`SATURATED`]. Never wraps.
///
/// The sum is truncated back to 8 bits, so increments below one step may leave a low channel
/// unchanged; repeated hits always converge toward saturation.
pub fn add_sat(c: u8, delta: f64) -> u8 {
    (f64::from(c) + delta).clamp(0.0, f64::from(SATURATED)) as u8
}

/// Density blend for a successful event: blue-dominant, desaturating toward white as hits pile up.
pub fn blend_pass(px: &mut Rgba8, delta: f64) {
    px.r = add_sat(px.r, delta / 4.0);
    px.g = add_sat(px.g, delta / 4.0);
    px.b = add_sat(px.b, delta);
}

/// Density blend for a failed event: red only, so dense failure clusters stay saturated red.
pub fn blend_fail(px: &mut Rgba8, delta: f64) {
    px.r = add_sat(px.r, delta);
}

/// Shade a channel from the background gray toward full intensity as `gain` rises from 0.
///
/// Computed at 16-bit precision and reduced to 8 bits. Negative or NaN gain stays at background.
pub fn progress_shade(gain: f64) -> u8 {
    let gain = gain.max(0.0);
    let base = f64::from(u32::from(BG) << 8);
    let v = (base + f64::from(MAX_C16) * gain).min(f64::from(MAX_C16));
    ((v as u32) >> 8) as u8
}

/// Wave color for an in-flight successful event at the given progress fraction.
pub fn wave_pass_color(progress: f64) -> Rgba8 {
    let rg = progress_shade(progress / 4.0);
    Rgba8::opaque([rg, rg, progress_shade(progress)])
}

/// Wave color for an in-flight failed event at the given progress fraction.
pub fn wave_fail_color(progress: f64) -> Rgba8 {
    let gb = progress_shade(progress / 4.0);
    Rgba8::opaque([progress_shade(progress), gb, gb])
}

/// Shade of red for one class of failures in a stack of `layers` classes.
pub fn error_stack_color(layer: usize, layers: usize) -> Rgba8 {
    let v = layer as f64 * 255.0 / layers.max(1) as f64;
    let gb = (11.0 + v * 2.0 / 3.0) as u8;
    Rgba8::opaque([(127.0 + v / 2.0) as u8, gb, gb])
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/blend.rs"]
mod tests;
