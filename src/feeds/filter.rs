use crate::feeds::binlog::EventData;
use crate::foundation::core::TimeRange;

/// Predicate selecting which records reach a renderer (or survive CSV conversion).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventFilter {
    /// Start times outside this inclusive range are rejected.
    pub time: TimeRange,
    /// Keep only this event type, if set.
    pub event_type: Option<u8>,
    /// Keep only this region, if set.
    pub region: Option<u8>,
    /// Keep only this status, if set.
    pub status: Option<i8>,
}

impl EventFilter {
    /// Filter on time only.
    pub fn new(time: TimeRange) -> Self {
        Self {
            time,
            event_type: None,
            region: None,
            status: None,
        }
    }

    /// Restrict to one event type.
    pub fn with_event_type(mut self, event_type: Option<u8>) -> Self {
        self.event_type = event_type;
        self
    }

    /// Restrict to one region.
    pub fn with_region(mut self, region: Option<u8>) -> Self {
        self.region = region;
        self
    }

    /// Restrict to one status.
    pub fn with_status(mut self, status: Option<i8>) -> Self {
        self.status = status;
        self
    }

    /// Whether `e` passes every configured criterion.
    pub fn matches(&self, e: &EventData) -> bool {
        self.time.contains(e.start)
            && self.event_type.is_none_or(|t| t == e.event_type)
            && self.region.is_none_or(|r| r == e.region)
            && self.status.is_none_or(|s| s == e.status)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/feeds/filter.rs"]
mod tests;
