use crate::{
    obs::{MetricsEvent, MetricsSink},
    tracker::StreakTracker,
    value::{ColumnKind, ColumnValue},
};
use std::cell::RefCell;

///
/// RecordingSink
/// Captures every metrics event emitted inside a scoped override.
///

#[derive(Default)]
pub(crate) struct RecordingSink {
    events: RefCell<Vec<MetricsEvent>>,
}

impl RecordingSink {
    pub(crate) fn events(&self) -> Vec<MetricsEvent> {
        self.events.borrow().clone()
    }
}

impl MetricsSink for RecordingSink {
    fn record(&self, event: MetricsEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Feed single-column rows through a fresh tracker and collect outputs.
pub(crate) fn run_single(kind: ColumnKind, rows: &[ColumnValue<'_>]) -> Vec<u64> {
    let mut tracker = StreakTracker::from_kinds(&[kind]);

    rows.iter()
        .map(|value| tracker.observe(std::slice::from_ref(value)))
        .collect()
}
