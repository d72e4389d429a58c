use crate::canvas::blend::error_stack_color;
use crate::canvas::surface::Canvas;
use crate::foundation::config::check_canvas;
use crate::foundation::core::EventDataPoint;
use crate::foundation::error::PerspectiveResult;
use crate::render::stack::{StatusSamples, paint_layers};
use crate::render::visualizer::Visualizer;

/// Failure counts over time, stacked by failure class.
///
/// Columns bin the observed start times; the busiest column fills the height. Classes stack
/// bottom-up in ascending status order, darker red at the bottom.
pub struct ErrorStack {
    width: u32,
    height: u32,
    samples: StatusSamples,
}

impl ErrorStack {
    /// Create an error-stack renderer.
    pub fn new(width: u32, height: u32) -> PerspectiveResult<Self> {
        check_canvas(width, height)?;
        Ok(Self {
            width,
            height,
            samples: StatusSamples::default(),
        })
    }
}

impl Visualizer for ErrorStack {
    fn record(&mut self, e: EventDataPoint) {
        if !e.passed() {
            self.samples.push(e.start, e.status);
        }
    }

    fn render(self: Box<Self>) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height);
        let classes: Vec<i16> = self.samples.classes().into_iter().collect();
        let columns = self.samples.bin(self.width);
        let tallest = columns.iter().map(|c| c.values().sum::<u64>()).max().unwrap_or(0);
        for (x, column) in columns.iter().enumerate() {
            let layers = classes.iter().enumerate().map(|(i, class)| {
                let count = column.get(class).copied().unwrap_or(0);
                (count, error_stack_color(i, classes.len()))
            });
            paint_layers(&mut canvas, x as i64, layers, tallest);
        }
        canvas
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/error_stack.rs"]
mod tests;
