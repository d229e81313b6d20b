//! Module: slot
//! Responsibility: per-column "last seen value" storage and equality policy.
//! Does not own: NULL handling or the streak counter.
//! Boundary: consumed by `StreakTracker` once per column per row.

mod text;


pub use text::TextBuffer;

use crate::{
    REAL_TOLERANCE,
    value::{ColumnKind, ColumnValue},
};

///
/// ColumnSlot
///
/// Typed storage for one monitored column. The variant is chosen from the
/// column kind at setup and never changes afterwards; the payload is the
/// value observed on the most recent non-NULL row.
///

#[derive(Clone, Debug, PartialEq)]
pub enum ColumnSlot {
    Text(TextBuffer),
    Decimal(TextBuffer),
    Real(f64),
    Integer(i64),
}

impl ColumnSlot {
    /// Build one zero-initialized slot for a column kind.
    #[must_use]
    pub const fn new(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Text => Self::Text(TextBuffer::new()),
            ColumnKind::Decimal => Self::Decimal(TextBuffer::new()),
            ColumnKind::Real => Self::Real(0.0),
            ColumnKind::Integer => Self::Integer(0),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ColumnKind {
        match self {
            Self::Text(_) => ColumnKind::Text,
            Self::Decimal(_) => ColumnKind::Decimal,
            Self::Real(_) => ColumnKind::Real,
            Self::Integer(_) => ColumnKind::Integer,
        }
    }

    /// Compare one incoming value against the stored one and refresh storage.
    ///
    /// Text is only rewritten when it differs. Reals and integers are always
    /// replaced, so a run of reals drifting by less than the tolerance per
    /// row keeps matching.
    pub fn observe(&mut self, value: &ColumnValue<'_>) -> bool {
        match (self, *value) {
            (
                Self::Text(stored) | Self::Decimal(stored),
                ColumnValue::Text(bytes) | ColumnValue::Decimal(bytes),
            ) => {
                let equal = stored.matches(bytes);
                if !equal {
                    stored.overwrite(bytes);
                }

                equal
            }
            (Self::Real(stored), ColumnValue::Real(new)) => {
                let equal = (new - *stored).abs() < REAL_TOLERANCE;
                *stored = new;

                equal
            }
            (Self::Integer(stored), ColumnValue::Integer(new)) => {
                let equal = new == *stored;
                *stored = new;

                equal
            }
            // Slot/value pairings the host contract rules out count as equal;
            // one malformed row must not end the stream.
            _ => true,
        }
    }

    /// Borrow the stored value in its column-value shape.
    #[must_use]
    pub fn stored(&self) -> ColumnValue<'_> {
        match self {
            Self::Text(buf) => ColumnValue::Text(buf.as_bytes()),
            Self::Decimal(buf) => ColumnValue::Decimal(buf.as_bytes()),
            Self::Real(value) => ColumnValue::Real(*value),
            Self::Integer(value) => ColumnValue::Integer(*value),
        }
    }
}
