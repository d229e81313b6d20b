#[macro_use]
mod macros;

#[cfg(test)]
mod tests;

use std::fmt;

///
/// ColumnKind
///
/// Canonical representation kind of one monitored column.
/// Decided once when a tracker is set up and never changed afterwards.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColumnKind {
    Text,
    Decimal,
    Real,
    Integer,
}

impl ColumnKind {
    /// Return the full metadata descriptor for one column kind.
    #[must_use]
    pub const fn metadata(self) -> ColumnMetadata {
        column_kind_registry!(metadata_from_registry, self)
    }

    /// Return the equality policy used when comparing consecutive rows.
    #[must_use]
    pub const fn policy(self) -> ComparePolicy {
        self.metadata().policy
    }

    /// Return whether values of this kind are held as raw bytes.
    #[must_use]
    pub const fn is_textual(self) -> bool {
        self.metadata().is_textual
    }

    /// Stable human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        self.metadata().label
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// ColumnMetadata
///
/// Capability metadata shared by the core slot and host layers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColumnMetadata {
    pub label: &'static str,
    pub policy: ComparePolicy,
    pub is_textual: bool,
}

///
/// ComparePolicy
///
/// How two consecutive values of one column are judged equal.
/// Decimals travel as text and are compared as bytes, not numerically.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComparePolicy {
    Bytes,
    Tolerance,
    Exact,
}

/// Ordered list of all column kinds in registry order.
pub const ALL_COLUMN_KINDS: [ColumnKind; 4] = column_kind_registry!(all_kinds_from_registry);
