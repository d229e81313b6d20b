#[cfg(test)]
mod tests;

pub use runrank_primitives::{ALL_COLUMN_KINDS, ColumnKind, ComparePolicy};

///
/// ColumnValue
///
/// One column's value on one row, borrowed from the host for the duration
/// of a single observation. Decimals arrive as their textual rendering.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColumnValue<'a> {
    Null,
    Text(&'a [u8]),
    Decimal(&'a [u8]),
    Real(f64),
    Integer(i64),
}

impl<'a> ColumnValue<'a> {
    #[must_use]
    pub const fn text(value: &'a str) -> Self {
        Self::Text(value.as_bytes())
    }

    #[must_use]
    pub const fn decimal(value: &'a str) -> Self {
        Self::Decimal(value.as_bytes())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Column kind carried by this value, or `None` for NULL.
    #[must_use]
    pub const fn kind(&self) -> Option<ColumnKind> {
        match self {
            Self::Null => None,
            Self::Text(_) => Some(ColumnKind::Text),
            Self::Decimal(_) => Some(ColumnKind::Decimal),
            Self::Real(_) => Some(ColumnKind::Real),
            Self::Integer(_) => Some(ColumnKind::Integer),
        }
    }

    /// Raw bytes for textual values.
    #[must_use]
    pub const fn as_text_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            Self::Text(bytes) | Self::Decimal(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<i64> for ColumnValue<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ColumnValue<'_> {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl<'a> From<&'a str> for ColumnValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::text(value)
    }
}

impl<'a, T> From<Option<T>> for ColumnValue<'a>
where
    T: Into<ColumnValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
