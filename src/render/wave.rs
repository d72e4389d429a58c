use crate::canvas::blend::{wave_fail_color, wave_pass_color};
use crate::canvas::surface::Canvas;
use crate::foundation::config::check_canvas;
use crate::foundation::core::{EventDataPoint, TimeRange};
use crate::foundation::error::PerspectiveResult;
use crate::render::visualizer::Visualizer;
use crate::render::window::{ActiveWindow, ColumnCursor};

/// Horizontally scrolling concurrency trace.
///
/// Each column shows the events in flight when the cursor reached it: successes stacked upward
/// from the center line, failures downward, one pixel per event. Color encodes how far each event
/// has progressed, from background gray toward blue (success) or red (failure).
pub struct Wave {
    canvas: Canvas,
    window: ActiveWindow,
    cursor: ColumnCursor,
}

impl Wave {
    /// Create a wave renderer mapping `range` onto the canvas width.
    pub fn new(width: u32, height: u32, range: TimeRange) -> PerspectiveResult<Self> {
        check_canvas(width, height)?;
        Ok(Self {
            canvas: Canvas::new(width, height),
            window: ActiveWindow::default(),
            cursor: ColumnCursor::new(range, width),
        })
    }
}

impl Visualizer for Wave {
    fn record(&mut self, e: EventDataPoint) {
        self.window.advance(e);
        for x in self.cursor.advance_to(e.start) {
            paint_wave_column(
                &mut self.canvas,
                x,
                self.window.passing().iter().rev(),
                self.window.failing().iter().rev(),
                e.start,
            );
        }
    }

    fn render(self: Box<Self>) -> Canvas {
        self.canvas
    }
}

/// Paint one wave column. Events are stacked in iteration order: `passing` upward from the row
/// just above the center, `failing` downward from the center row. Progress is measured at `now`.
pub(crate) fn paint_wave_column<'a>(
    canvas: &mut Canvas,
    x: i64,
    passing: impl Iterator<Item = &'a EventDataPoint>,
    failing: impl Iterator<Item = &'a EventDataPoint>,
    now: i32,
) {
    let h = i64::from(canvas.height());
    let center = h / 2;
    for (y, p) in (0..center).rev().zip(passing) {
        canvas.set_pixel(x, y, wave_pass_color(p.progress_at(now)));
    }
    for (y, f) in (center..h).zip(failing) {
        canvas.set_pixel(x, y, wave_fail_color(f.progress_at(now)));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/wave.rs"]
mod tests;
