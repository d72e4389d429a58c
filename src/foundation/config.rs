use crate::foundation::core::TimeRange;
use crate::foundation::error::{PerspectiveError, PerspectiveResult};

/// Gray level for visualization backgrounds.
pub const BG: u8 = 33;
/// Gray level for grid lines.
pub const GRID: u8 = 45;
/// Alpha component of an opaque color value.
pub const OPAQUE: u8 = 255;
/// Saturated 8-bit channel value.
pub const SATURATED: u8 = 255;
/// Maximum 16-bit channel value, used by the progress shading in the wave renderers.
pub const MAX_C16: u32 = 65535;

/// Solid color for successful events in bar-style renderers.
pub const PASS_RGB: [u8; 3] = [11, 11, 255];
/// Solid color for failed events in bar-style renderers.
pub const FAIL_RGB: [u8; 3] = [255, 11, 11];

/// Size in bytes of one little-endian binary log record.
pub const BIN_RECORD_LEN: usize = 16;

/// Construction parameters shared by all renderer variants.
///
/// Each variant reads only the fields it needs (the wave family ignores `run_time_scale`, the
/// aggregate stacks ignore the time range). Missing JSON fields fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Least recent time to show, in seconds since the Unix epoch.
    pub min_time: i32,
    /// Most recent time to show, in seconds since the Unix epoch. Defaults to `i32::MAX`, the end
    /// of the log format's time axis.
    pub max_time: i32,
    /// Pixels for every doubling of run time (in seconds).
    pub run_time_scale: f64,
    /// Number of density color steps before a channel saturates.
    pub color_steps: u32,
    /// Number of divisions separated by vertical grid lines (0 disables them).
    pub x_grid: u32,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 128,
            min_time: 0,
            max_time: i32::MAX,
            run_time_scale: 16.0,
            color_steps: 1,
            x_grid: 0,
        }
    }
}

impl VisualizerConfig {
    /// Check the parameters common to every variant.
    pub fn validate(&self) -> PerspectiveResult<()> {
        check_canvas(self.width, self.height)?;
        check_scale(self.run_time_scale)?;
        check_color_steps(self.color_steps)?;
        Ok(())
    }

    /// The configured time range, validated.
    pub fn time_range(&self) -> PerspectiveResult<TimeRange> {
        TimeRange::new(self.min_time, self.max_time)
    }

    /// Parse a JSON config, filling absent fields with defaults.
    pub fn from_json(json: &str) -> PerspectiveResult<Self> {
        serde_json::from_str(json).map_err(|e| PerspectiveError::serde(e.to_string()))
    }
}

pub(crate) fn check_canvas(width: u32, height: u32) -> PerspectiveResult<()> {
    if width == 0 || height == 0 {
        return Err(PerspectiveError::validation(
            "canvas width/height must be non-zero",
        ));
    }
    Ok(())
}

pub(crate) fn check_scale(scale: f64) -> PerspectiveResult<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(PerspectiveError::validation(
            "run time scale must be a finite value > 0",
        ));
    }
    Ok(())
}

pub(crate) fn check_color_steps(steps: u32) -> PerspectiveResult<()> {
    if steps == 0 {
        return Err(PerspectiveError::validation("color steps must be >= 1"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
