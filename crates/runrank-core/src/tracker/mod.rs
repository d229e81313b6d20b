//! Module: tracker
//! Responsibility: the streak state machine over one row at a time.
//! Does not own: host argument decoding, metrics, or lifecycle teardown.
//! Boundary: `initialize` once, then `observe` once per row in row order.


use crate::{
    error::SetupError,
    slot::ColumnSlot,
    udf::HostType,
    value::{ColumnKind, ColumnValue},
};

///
/// RowOutcome
///
/// How one observed row moved the streak counter.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RowOutcome {
    /// A column was NULL; the row reports 0 and no state changed.
    Null,
    /// Every column matched the previous row; the counter grew by one.
    Extended,
    /// At least one column differed; the counter went back to 0.
    Reset,
}

///
/// Observation
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Observation {
    pub outcome: RowOutcome,
    pub streak: u64,
}

///
/// StreakTracker
///
/// Counts how many consecutive prior rows held identical values in every
/// monitored column. The column list is fixed at setup; each slot keeps
/// the value seen on the most recent non-NULL row.
///

#[derive(Clone, Debug, PartialEq)]
pub struct StreakTracker {
    counter: u64,
    columns: Box<[ColumnSlot]>,
}

impl StreakTracker {
    /// Validate declared argument types and build one zeroed tracker.
    ///
    /// The first ROW or unrecognized type rejects the whole setup.
    pub fn initialize(column_types: &[HostType]) -> Result<Self, SetupError> {
        let kinds = column_types
            .iter()
            .enumerate()
            .map(|(index, host_type)| host_type.column_kind(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_kinds(&kinds))
    }

    /// Build one zeroed tracker from already-validated column kinds.
    #[must_use]
    pub fn from_kinds(kinds: &[ColumnKind]) -> Self {
        Self {
            counter: 0,
            columns: kinds.iter().copied().map(ColumnSlot::new).collect(),
        }
    }

    /// Observe one row and return the streak length to report for it.
    pub fn observe(&mut self, row: &[ColumnValue<'_>]) -> u64 {
        self.observe_outcome(row).streak
    }

    /// Observe one row and report how the counter moved.
    ///
    /// A NULL (or missing trailing) value short-circuits to 0 without
    /// touching the counter or any slot. Otherwise every slot is compared
    /// and refreshed, even after an earlier column already differed.
    pub fn observe_outcome(&mut self, row: &[ColumnValue<'_>]) -> Observation {
        let width = self.columns.len();
        if row.len() < width || row.iter().take(width).any(ColumnValue::is_null) {
            return Observation {
                outcome: RowOutcome::Null,
                streak: 0,
            };
        }

        let all_equal = self
            .columns
            .iter_mut()
            .zip(row)
            .fold(true, |all_equal, (slot, value)| slot.observe(value) & all_equal);

        let outcome = if all_equal {
            self.counter = self.counter.saturating_add(1);
            RowOutcome::Extended
        } else {
            self.counter = 0;
            RowOutcome::Reset
        };

        Observation {
            outcome,
            streak: self.counter,
        }
    }

    /// Current streak length.
    #[must_use]
    pub const fn counter(&self) -> u64 {
        self.counter
    }

    /// Number of monitored columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<ColumnKind> {
        self.columns.iter().map(ColumnSlot::kind).collect()
    }

    #[must_use]
    pub fn slots(&self) -> &[ColumnSlot] {
        &self.columns
    }
}
