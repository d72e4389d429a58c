use std::ops::RangeInclusive;

use crate::foundation::core::{EventDataPoint, TimeRange};
use crate::foundation::math::time_to_x;

/// Events still in flight as of the most recently recorded start time, split by outcome and kept
/// in arrival order.
///
/// Eviction is driven by the input stream only: an event leaves the window once
/// `start + run <= latest.start`.
#[derive(Debug, Default)]
pub(crate) struct ActiveWindow {
    passing: Vec<EventDataPoint>,
    failing: Vec<EventDataPoint>,
}

impl ActiveWindow {
    /// Prune finished events relative to `e.start`, then admit `e`.
    pub(crate) fn advance(&mut self, e: EventDataPoint) {
        let now = i64::from(e.start);
        self.passing.retain(|p| p.end() > now);
        self.failing.retain(|f| f.end() > now);
        if e.passed() {
            self.passing.push(e);
        } else {
            self.failing.push(e);
        }
    }

    /// In-flight successes, oldest first.
    pub(crate) fn passing(&self) -> &[EventDataPoint] {
        &self.passing
    }

    /// In-flight failures, oldest first.
    pub(crate) fn failing(&self) -> &[EventDataPoint] {
        &self.failing
    }
}

/// Left-to-right draw position for renderers that paint whole columns as time advances.
#[derive(Debug)]
pub(crate) struct ColumnCursor {
    range: TimeRange,
    width: u32,
    x: i64,
}

impl ColumnCursor {
    pub(crate) fn new(range: TimeRange, width: u32) -> Self {
        Self { range, width, x: 0 }
    }

    /// Current column.
    #[cfg(test)]
    pub(crate) fn x(&self) -> i64 {
        self.x
    }

    /// Move the cursor to the column of time `t`, returning the columns passed over (excluding
    /// the starting one). Never moves backwards and never past `width`.
    pub(crate) fn advance_to(&mut self, t: i32) -> RangeInclusive<i64> {
        let target = time_to_x(self.range, self.width, f64::from(t)).min(i64::from(self.width));
        let from = self.x + 1;
        if target > self.x {
            self.x = target;
        }
        from..=target
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/window.rs"]
mod tests;
