//! Core runtime for runrank: column values, typed slots, the streak
//! tracker state machine, the host lifecycle boundary, and observability.
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod obs;
pub mod slot;
pub mod tracker;
pub mod udf;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Capacity in bytes of the text buffer held by one textual slot.
///
/// Incoming text is truncated to this many bytes both for storage and for
/// comparison, so two values that only differ past this point are equal.
pub const TEXT_CAPACITY: usize = 120;

/// Absolute difference under which two consecutive reals are equal.
pub const REAL_TOLERANCE: f64 = 1e-5;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or host helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        slot::ColumnSlot,
        tracker::StreakTracker,
        value::{ColumnKind, ColumnValue},
    };
}
