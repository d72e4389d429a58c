use std::collections::{BTreeMap, BTreeSet};

use crate::canvas::surface::{Canvas, Rgba8};
use crate::foundation::math::to_px;

/// Per-column status counts, keyed by status.
pub(crate) type Column = BTreeMap<i16, u64>;

/// Buffered `(start, status)` samples for the aggregate stack renderers.
///
/// The time axis is only known once every event is in, so binning is deferred to render time.
#[derive(Debug, Default)]
pub(crate) struct StatusSamples {
    samples: Vec<(i32, i16)>,
}

impl StatusSamples {
    pub(crate) fn push(&mut self, start: i32, status: i16) {
        self.samples.push((start, status));
    }

    /// Distinct statuses seen, ascending.
    pub(crate) fn classes(&self) -> BTreeSet<i16> {
        self.samples.iter().map(|&(_, s)| s).collect()
    }

    /// Bin samples into `width` columns spanning the observed `[min start, max start]`.
    pub(crate) fn bin(&self, width: u32) -> Vec<Column> {
        let mut columns = vec![Column::new(); width as usize];
        let (Some(min), Some(max)) = (
            self.samples.iter().map(|&(t, _)| t).min(),
            self.samples.iter().map(|&(t, _)| t).max(),
        ) else {
            return columns;
        };
        let span = f64::from(max) - f64::from(min) + 1.0;
        let last = i64::from(width) - 1;
        for &(t, status) in &self.samples {
            let x = to_px(f64::from(width) * (f64::from(t) - f64::from(min)) / span).clamp(0, last);
            *columns[x as usize].entry(status).or_default() += 1;
        }
        columns
    }
}

/// Stack `layers` bottom-up in column `x`, scaled so that `denom` fills the height.
///
/// Layer edges are rounded from cumulative counts, so layers always tile without gaps.
pub(crate) fn paint_layers(
    canvas: &mut Canvas,
    x: i64,
    layers: impl IntoIterator<Item = (u64, Rgba8)>,
    denom: u64,
) {
    if denom == 0 {
        return;
    }
    let h = i64::from(canvas.height());
    let mut cum = 0u64;
    let mut prev = h;
    for (count, color) in layers {
        cum += count;
        let top = h - (h as f64 * cum as f64 / denom as f64).round() as i64;
        canvas.fill_column(x, top, prev, color);
        prev = top;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/stack.rs"]
mod tests;
