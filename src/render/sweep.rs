use crate::canvas::blend::{blend_fail, blend_pass};
use crate::canvas::surface::Canvas;
use crate::foundation::config::{SATURATED, check_canvas, check_color_steps, check_scale};
use crate::foundation::core::{EventDataPoint, TimeRange};
use crate::foundation::error::PerspectiveResult;
use crate::foundation::math::{doubling_step, log2_px, time_to_x};
use crate::render::grid::{draw_rows_from_center, draw_x_divisions};
use crate::render::visualizer::Visualizer;

/// Arc-density plot of every event's lifetime.
///
/// The x axis is absolute time; the y axis is the log2 of time elapsed since the event started,
/// growing upward from the center line for successes and downward for failures. Overlapping arcs
/// accumulate color, so dense regions saturate (successes toward white, failures toward red).
pub struct Sweep {
    canvas: Canvas,
    range: TimeRange,
    scale: f64,
    delta: f64,
}

impl Sweep {
    /// Create a sweep renderer.
    ///
    /// `scale` is the number of pixels per doubling of elapsed time, `color_steps` the number of
    /// hits before a channel saturates, and `x_grid` the number of vertical grid divisions (0 for
    /// none).
    pub fn new(
        width: u32,
        height: u32,
        range: TimeRange,
        scale: f64,
        color_steps: u32,
        x_grid: u32,
    ) -> PerspectiveResult<Self> {
        check_canvas(width, height)?;
        check_scale(scale)?;
        check_color_steps(color_steps)?;

        let mut canvas = Canvas::new(width, height);
        draw_x_divisions(&mut canvas, x_grid);
        draw_rows_from_center(&mut canvas, doubling_step(scale));
        Ok(Self {
            canvas,
            range,
            scale,
            delta: f64::from(SATURATED) / f64::from(color_steps),
        })
    }

    fn reach(&self, elapsed: i64) -> i64 {
        log2_px(self.scale, elapsed.max(1) as f64)
    }
}

impl Visualizer for Sweep {
    fn record(&mut self, e: EventDataPoint) {
        let h = i64::from(self.canvas.height());
        let width = i64::from(self.canvas.width());
        let center = h / 2;
        let passed = e.passed();
        let limit = if passed { center } else { h - center };

        let t0 = i64::from(e.start);
        // Offsets reached left of the canvas were spent there and are not replayed.
        let first = t0.max(i64::from(self.range.min));
        let mut d = if first > t0 {
            self.reach(first - 1 - t0).clamp(0, limit)
        } else {
            0
        };

        for t in first..=e.end() {
            if d >= limit {
                break;
            }
            let x = time_to_x(self.range, self.canvas.width(), t as f64);
            if x >= width {
                break;
            }
            let reach = self.reach(t - t0).min(limit);
            while d < reach {
                if passed {
                    blend_pass(self.canvas.pixel_mut(x, center - 1 - d), self.delta);
                } else {
                    blend_fail(self.canvas.pixel_mut(x, center + d), self.delta);
                }
                d += 1;
            }
        }
    }

    fn render(self: Box<Self>) -> Canvas {
        self.canvas
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sweep.rs"]
mod tests;
