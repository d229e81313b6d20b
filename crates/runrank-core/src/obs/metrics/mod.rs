use crate::error::ErrorClass;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// EventState
/// Ephemeral, in-memory counters for streak function lifecycles.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
    pub(crate) max_streak: u64,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventOps {
    // Setup
    pub setups_accepted: u64,
    pub setups_rejected: u64,
    pub rejected_invalid_argument: u64,
    pub rejected_unsupported: u64,
    pub columns_tracked: u64,

    // Rows
    pub rows_observed: u64,
    pub rows_null: u64,
    pub streak_extends: u64,
    pub streak_resets: u64,

    // Teardown
    pub teardowns: u64,
}

///
/// EventReport
/// Point-in-time snapshot handed to endpoints and tests.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    pub max_streak: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

/// Count one rejected setup under its error class.
pub(crate) const fn add_rejection(ops: &mut EventOps, class: ErrorClass) {
    ops.setups_rejected = ops.setups_rejected.saturating_add(1);
    match class {
        ErrorClass::InvalidArgument => {
            ops.rejected_invalid_argument = ops.rejected_invalid_argument.saturating_add(1);
        }
        ErrorClass::Unsupported => {
            ops.rejected_unsupported = ops.rejected_unsupported.saturating_add(1);
        }
    }
}

/// Snapshot the current state.
#[must_use]
pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport {
        ops: m.ops.clone(),
        max_streak: m.max_streak,
    })
}
