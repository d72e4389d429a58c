use crate::foundation::error::{PerspectiveError, PerspectiveResult};

/// Stripped-down event payload consumed by the renderers, after filtering of the binary log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EventDataPoint {
    /// Start time, in seconds since the Unix epoch.
    pub start: i32,
    /// Run time, in seconds.
    pub run: i32,
    /// Zero indicates success, non-zero a failure class.
    pub status: i16,
}

impl EventDataPoint {
    /// Build an event point.
    pub fn new(start: i32, run: i32, status: i16) -> Self {
        Self { start, run, status }
    }

    /// Whether the event completed successfully.
    pub fn passed(self) -> bool {
        self.status == 0
    }

    /// End time (`start + run`), widened so it cannot overflow.
    pub fn end(self) -> i64 {
        i64::from(self.start) + i64::from(self.run)
    }

    /// Fraction of this event's run elapsed at time `now`.
    ///
    /// The denominator is `run + 1`, so an event that is still in flight stays below 1.0.
    pub fn progress_at(self, now: i32) -> f64 {
        let elapsed = f64::from(now) - f64::from(self.start);
        elapsed / (f64::from(self.run) + 1.0)
    }
}

/// Inclusive time range, in epoch seconds, mapped onto a canvas axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    /// Lower limit.
    pub min: i32,
    /// Upper limit (must be > `min`).
    pub max: i32,
}

impl TimeRange {
    /// Build a range; `min` must be strictly below `max`.
    pub fn new(min: i32, max: i32) -> PerspectiveResult<Self> {
        if min >= max {
            return Err(PerspectiveError::validation(format!(
                "time range min ({min}) must be < max ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    /// Length of the range in seconds.
    pub fn span(self) -> f64 {
        f64::from(self.max) - f64::from(self.min)
    }

    /// Whether `t` lies within the range, bounds included.
    pub fn contains(self, t: i32) -> bool {
        self.min <= t && t <= self.max
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
