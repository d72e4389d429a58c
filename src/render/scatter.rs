use crate::canvas::blend::{blend_fail, blend_pass};
use crate::canvas::surface::Canvas;
use crate::foundation::config::{SATURATED, check_canvas, check_color_steps, check_scale};
use crate::foundation::core::{EventDataPoint, TimeRange};
use crate::foundation::error::PerspectiveResult;
use crate::foundation::math::{doubling_step, log2_px, time_to_x};
use crate::render::grid::{draw_rows_from_bottom, draw_x_divisions};
use crate::render::visualizer::Visualizer;

/// Point-density plot of start time against log2 run time.
///
/// A one-second run sits just below the bottom edge; each doubling of run time moves `scale`
/// pixels up.
pub struct Scatter {
    canvas: Canvas,
    range: TimeRange,
    scale: f64,
    delta: f64,
}

impl Scatter {
    /// Create a scatter renderer. Parameters as for [`crate::Sweep::new`].
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
        draw_rows_from_bottom(&mut canvas, doubling_step(scale));
        Ok(Self {
            canvas,
            range,
            scale,
            delta: f64::from(SATURATED) / f64::from(color_steps),
        })
    }
}

/// Row for a run time on a log2 axis anchored at `height`, one past the bottom row. Non-positive
/// runs saturate off canvas.
pub(crate) fn run_row(height: u32, scale: f64, run: i32) -> i64 {
    i64::from(height).saturating_sub(log2_px(scale, f64::from(run)))
}

impl Visualizer for Scatter {
    fn record(&mut self, e: EventDataPoint) {
        let x = time_to_x(self.range, self.canvas.width(), f64::from(e.start));
        let y = run_row(self.canvas.height(), self.scale, e.run);
        let px = self.canvas.pixel_mut(x, y);
        if e.passed() {
            blend_pass(px, self.delta);
        } else {
            blend_fail(px, self.delta);
        }
    }

    fn render(self: Box<Self>) -> Canvas {
        self.canvas
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scatter.rs"]
mod tests;
