use crate::canvas::surface::{Canvas, Rgba8};
use crate::foundation::config::{FAIL_RGB, PASS_RGB, check_canvas};
use crate::foundation::core::{EventDataPoint, TimeRange};
use crate::foundation::error::PerspectiveResult;
use crate::render::visualizer::Visualizer;
use crate::render::window::{ActiveWindow, ColumnCursor};

/// Concurrency over time as bars rising from the bottom edge.
///
/// Each column holds one pixel per in-flight event: failures first (red), successes above them
/// (blue). Bars taller than the canvas are clipped at the top.
pub struct RollingStack {
    canvas: Canvas,
    window: ActiveWindow,
    cursor: ColumnCursor,
}

impl RollingStack {
    /// Create a rolling-stack renderer mapping `range` onto the canvas width.
    pub fn new(width: u32, height: u32, range: TimeRange) -> PerspectiveResult<Self> {
        check_canvas(width, height)?;
        Ok(Self {
            canvas: Canvas::new(width, height),
            window: ActiveWindow::default(),
            cursor: ColumnCursor::new(range, width),
        })
    }
}

impl Visualizer for RollingStack {
    fn record(&mut self, e: EventDataPoint) {
        self.window.advance(e);
        let h = i64::from(self.canvas.height());
        let fails = self.window.failing().len() as i64;
        let passes = self.window.passing().len() as i64;
        let fail_top = h.saturating_sub(fails);
        let pass_top = fail_top.saturating_sub(passes);
        for x in self.cursor.advance_to(e.start) {
            self.canvas.fill_column(x, fail_top, h, Rgba8::opaque(FAIL_RGB));
            self.canvas.fill_column(x, pass_top, fail_top, Rgba8::opaque(PASS_RGB));
        }
    }

    fn render(self: Box<Self>) -> Canvas {
        self.canvas
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/rolling_stack.rs"]
mod tests;
