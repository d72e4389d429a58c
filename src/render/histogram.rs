use crate::canvas::surface::{Canvas, Rgba8};
use crate::foundation::config::{FAIL_RGB, PASS_RGB, check_canvas, check_scale};
use crate::foundation::core::EventDataPoint;
use crate::foundation::error::PerspectiveResult;
use crate::foundation::math::doubling_step;
use crate::render::grid::draw_rows_from_bottom;
use crate::render::scatter::run_row;
use crate::render::visualizer::Visualizer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct RowCount {
    passed: u64,
    failed: u64,
}

impl RowCount {
    fn total(self) -> u64 {
        self.passed + self.failed
    }
}

/// Run-time distribution as horizontal bars on the scatter plot's log2 axis.
///
/// Counting happens in `record`; bars are only drawn in `render`, once the longest row is known.
pub struct Histogram {
    canvas: Canvas,
    scale: f64,
    rows: Vec<RowCount>,
}

impl Histogram {
    /// Create a histogram with `scale` pixels per doubling of run time.
    pub fn new(width: u32, height: u32, scale: f64) -> PerspectiveResult<Self> {
        check_canvas(width, height)?;
        check_scale(scale)?;
        let mut canvas = Canvas::new(width, height);
        draw_rows_from_bottom(&mut canvas, doubling_step(scale));
        Ok(Self {
            canvas,
            scale,
            rows: vec![RowCount::default(); height as usize],
        })
    }
}

impl Visualizer for Histogram {
    fn record(&mut self, e: EventDataPoint) {
        let y = run_row(self.canvas.height(), self.scale, e.run);
        let Some(row) = usize::try_from(y).ok().and_then(|y| self.rows.get_mut(y)) else {
            return;
        };
        if e.passed() {
            row.passed += 1;
        } else {
            row.failed += 1;
        }
    }

    fn render(self: Box<Self>) -> Canvas {
        let Self {
            mut canvas, rows, ..
        } = *self;
        let max = rows.iter().map(|r| r.total()).max().unwrap_or(0);
        if max == 0 {
            return canvas;
        }
        let w = f64::from(canvas.width());
        let len = |n: u64| (w * n as f64 / max as f64).round() as i64;
        for (y, row) in rows.iter().enumerate() {
            if row.total() == 0 {
                continue;
            }
            let total = len(row.total()).max(1);
            let passed = if row.failed == 0 {
                total
            } else {
                len(row.passed).min(total)
            };
            let y = y as i64;
            canvas.fill_row(y, 0, passed, Rgba8::opaque(PASS_RGB));
            canvas.fill_row(y, passed, total, Rgba8::opaque(FAIL_RGB));
        }
        canvas
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/histogram.rs"]
mod tests;
