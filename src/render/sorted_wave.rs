use crate::canvas::surface::Canvas;
use crate::foundation::config::check_canvas;
use crate::foundation::core::{EventDataPoint, TimeRange};
use crate::foundation::error::PerspectiveResult;
use crate::render::visualizer::Visualizer;
use crate::render::wave::paint_wave_column;
use crate::render::window::{ActiveWindow, ColumnCursor};

/// Wave variant whose columns are ordered by progress instead of arrival.
///
/// The most-finished events sit next to the center line and the freshest at the outer edge, so
/// each column reads as a smooth gradient. Ties keep the newest event closest to the center.
pub struct SortedWave {
    canvas: Canvas,
    window: ActiveWindow,
    cursor: ColumnCursor,
}

impl SortedWave {
    /// Create a sorted-wave renderer mapping `range` onto the canvas width.
    pub fn new(width: u32, height: u32, range: TimeRange) -> PerspectiveResult<Self> {
        check_canvas(width, height)?;
        Ok(Self {
            canvas: Canvas::new(width, height),
            window: ActiveWindow::default(),
            cursor: ColumnCursor::new(range, width),
        })
    }
}

impl Visualizer for SortedWave {
    fn record(&mut self, e: EventDataPoint) {
        self.window.advance(e);
        let columns = self.cursor.advance_to(e.start);
        if columns.is_empty() {
            return;
        }
        let passing = by_progress(self.window.passing(), e.start);
        let failing = by_progress(self.window.failing(), e.start);
        for x in columns {
            paint_wave_column(&mut self.canvas, x, passing.iter(), failing.iter(), e.start);
        }
    }

    fn render(self: Box<Self>) -> Canvas {
        self.canvas
    }
}

fn by_progress(active: &[EventDataPoint], now: i32) -> Vec<EventDataPoint> {
    let mut sorted: Vec<EventDataPoint> = active.iter().rev().copied().collect();
    sorted.sort_by(|a, b| b.progress_at(now).total_cmp(&a.progress_at(now)));
    sorted
}

#[cfg(test)]
#[path = "../../tests/unit/render/sorted_wave.rs"]
mod tests;
