//! Module: udf
//! Responsibility: the host lifecycle boundary (init, row, teardown).
//! Does not own: comparison policy or streak state.
//! Boundary: decodes raw host arguments and records metrics events.

mod descriptor;
mod host;


pub use descriptor::{FunctionDescriptor, RETURN_TYPE, SHARED_OBJECT};
pub use host::{HostArg, HostType, decode_arg};

use crate::{
    config::TrackerConfig,
    error::SetupError,
    obs::{MetricsEvent, sink::record},
    tracker::{RowOutcome, StreakTracker},
    value::ColumnValue,
};

///
/// OutputSpec
///
/// Result-column contract reported back to the host at setup.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OutputSpec {
    pub maybe_null: bool,
    pub max_length: u32,
}

/// Output contract of every streak function.
pub const OUTPUT_SPEC: OutputSpec = OutputSpec {
    maybe_null: true,
    max_length: 32,
};

///
/// TeardownReport
///
/// Summary of one function instance, produced when the host releases it.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TeardownReport {
    pub rows_observed: u64,
    pub null_rows: u64,
    pub resets: u64,
    pub final_counter: u64,
}

///
/// RankFunction
///
/// One host-driven streak function instance. Created by `init`, fed one
/// row at a time by `row`, and released exactly once by `teardown`, which
/// consumes it.
///

#[derive(Debug)]
pub struct RankFunction {
    config: TrackerConfig,
    tracker: StreakTracker,
    report: TeardownReport,
}

impl RankFunction {
    /// Validate argument types and set up a fresh instance.
    pub fn init(config: TrackerConfig, arg_types: &[HostType]) -> Result<Self, SetupError> {
        let tracker = match StreakTracker::initialize(arg_types) {
            Ok(tracker) => tracker,
            Err(err) => {
                record(MetricsEvent::SetupRejected { class: err.class() });
                return Err(err);
            }
        };

        record(MetricsEvent::SetupAccepted {
            columns: tracker.width(),
        });

        let function = Self {
            config,
            tracker,
            report: TeardownReport::default(),
        };
        function.debug_log(format!(
            "init {} columns={:?}",
            function.config.function_name,
            function.tracker.kinds()
        ));

        Ok(function)
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.config.debug {
            println!("[debug] {}", s.as_ref());
        }
    }

    #[must_use]
    pub const fn output_spec(&self) -> OutputSpec {
        OUTPUT_SPEC
    }

    #[must_use]
    pub const fn config(&self) -> &TrackerConfig {
        &self.config
    }

    #[must_use]
    pub const fn tracker(&self) -> &StreakTracker {
        &self.tracker
    }

    #[must_use]
    pub fn descriptor(&self) -> FunctionDescriptor {
        FunctionDescriptor::from_config(&self.config)
    }

    /// Decode one row of raw host arguments and return its streak value.
    pub fn row(&mut self, args: &[HostArg<'_>]) -> u64 {
        let row = self
            .tracker
            .slots()
            .iter()
            .zip(args)
            .map(|(slot, arg)| decode_arg(slot.kind(), *arg))
            .collect::<Vec<_>>();

        self.observe(&row)
    }

    /// Observe one row of already-typed values and return its streak value.
    pub fn observe(&mut self, row: &[ColumnValue<'_>]) -> u64 {
        let observation = self.tracker.observe_outcome(row);

        self.report.rows_observed = self.report.rows_observed.saturating_add(1);
        match observation.outcome {
            RowOutcome::Null => self.report.null_rows = self.report.null_rows.saturating_add(1),
            RowOutcome::Reset => self.report.resets = self.report.resets.saturating_add(1),
            RowOutcome::Extended => {}
        }

        record(MetricsEvent::RowObserved {
            outcome: observation.outcome,
            streak: observation.streak,
        });
        self.debug_log(format!(
            "row {} {:?} -> {}",
            self.report.rows_observed, observation.outcome, observation.streak
        ));

        observation.streak
    }

    /// Release the instance after its last row.
    #[must_use]
    pub fn teardown(self) -> TeardownReport {
        let report = TeardownReport {
            final_counter: self.tracker.counter(),
            ..self.report
        };

        record(MetricsEvent::Teardown {
            rows: report.rows_observed,
        });
        self.debug_log(format!(
            "teardown {} rows={}",
            self.config.function_name, report.rows_observed
        ));

        report
    }
}
