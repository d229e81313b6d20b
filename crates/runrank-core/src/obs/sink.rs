//! Metrics sink boundary.
//!
//! Tracker and host logic MUST NOT touch obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
//!
//! This module is the only allowed bridge between execution logic
//! and the global metrics state.
use crate::{error::ErrorClass, obs::metrics, tracker::RowOutcome};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = RefCell::new(None);
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    SetupAccepted { columns: usize },
    SetupRejected { class: ErrorClass },
    RowObserved { outcome: RowOutcome, streak: u64 },
    Teardown { rows: u64 },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default process-local sink that writes into global metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::SetupAccepted { columns } => {
                metrics::with_state_mut(|m| {
                    m.ops.setups_accepted = m.ops.setups_accepted.saturating_add(1);
                    m.ops.columns_tracked = m
                        .ops
                        .columns_tracked
                        .saturating_add(u64::try_from(columns).unwrap_or(u64::MAX));
                });
            }

            MetricsEvent::SetupRejected { class } => {
                metrics::with_state_mut(|m| metrics::add_rejection(&mut m.ops, class));
            }

            MetricsEvent::RowObserved { outcome, streak } => {
                metrics::with_state_mut(|m| {
                    m.ops.rows_observed = m.ops.rows_observed.saturating_add(1);
                    match outcome {
                        RowOutcome::Null => m.ops.rows_null = m.ops.rows_null.saturating_add(1),
                        RowOutcome::Extended => {
                            m.ops.streak_extends = m.ops.streak_extends.saturating_add(1);
                        }
                        RowOutcome::Reset => {
                            m.ops.streak_resets = m.ops.streak_resets.saturating_add(1);
                        }
                    }
                    if streak > m.max_streak {
                        m.max_streak = streak;
                    }
                });
            }

            MetricsEvent::Teardown { .. } => {
                metrics::with_state_mut(|m| {
                    m.ops.teardowns = m.ops.teardowns.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());
    if let Some(sink) = override_sink {
        sink.record(event);
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current metrics state for endpoint/test plumbing.
#[must_use]
pub fn metrics_report() -> metrics::EventReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
///
/// The previous sink is restored on every exit, including unwinding.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let prev = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(prev);

    f()
}
