use crate::canvas::blend::error_stack_color;
use crate::canvas::surface::{Canvas, Rgba8};
use crate::foundation::config::{PASS_RGB, check_canvas};
use crate::foundation::core::EventDataPoint;
use crate::foundation::error::PerspectiveResult;
use crate::render::stack::{StatusSamples, paint_layers};
use crate::render::visualizer::Visualizer;

/// Status proportions over time.
///
/// Every non-empty column is normalized to the full height: successes at the bottom, then each
/// failure class in ascending order with the error-stack palette.
pub struct StatusStack {
    width: u32,
    height: u32,
    samples: StatusSamples,
}

impl StatusStack {
    /// Create a status-stack renderer.
    pub fn new(width: u32, height: u32) -> PerspectiveResult<Self> {
        check_canvas(width, height)?;
        Ok(Self {
            width,
            height,
            samples: StatusSamples::default(),
        })
    }
}

impl Visualizer for StatusStack {
    fn record(&mut self, e: EventDataPoint) {
        self.samples.push(e.start, e.status);
    }

    fn render(self: Box<Self>) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height);
        let failures: Vec<i16> = self
            .samples
            .classes()
            .into_iter()
            .filter(|&s| s != 0)
            .collect();
        for (x, column) in self.samples.bin(self.width).iter().enumerate() {
            let total = column.values().sum::<u64>();
            let passed = column.get(&0).copied().unwrap_or(0);
            let layers = std::iter::once((passed, Rgba8::opaque(PASS_RGB))).chain(
                failures.iter().enumerate().map(|(i, class)| {
                    let count = column.get(class).copied().unwrap_or(0);
                    (count, error_stack_color(i, failures.len()))
                }),
            );
            paint_layers(&mut canvas, x as i64, layers, total);
        }
        canvas
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/status_stack.rs"]
mod tests;
