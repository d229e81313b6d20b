use crate::{
    error::SetupError,
    value::{ColumnKind, ColumnValue},
};
use derive_more::Display;

///
/// HostArg
///
/// Raw payload of one argument as handed over by the host for one row.
/// `None` is SQL NULL. Numeric payloads are 8 native-endian bytes.
///

pub type HostArg<'a> = Option<&'a [u8]>;

///
/// HostType
///
/// Declared argument type code from the host's result-type taxonomy.
///
/// IMPORTANT:
/// Codes are fixed by the host ABI and must not be renumbered.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum HostType {
    #[display("STRING_RESULT")]
    String,
    #[display("REAL_RESULT")]
    Real,
    #[display("INT_RESULT")]
    Int,
    #[display("ROW_RESULT")]
    Row,
    #[display("DECIMAL_RESULT")]
    Decimal,
    #[display("UNKNOWN_RESULT({_0})")]
    Unknown(i32),
}

impl HostType {
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::String,
            1 => Self::Real,
            2 => Self::Int,
            3 => Self::Row,
            4 => Self::Decimal,
            other => Self::Unknown(other),
        }
    }

    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::String => 0,
            Self::Real => 1,
            Self::Int => 2,
            Self::Row => 3,
            Self::Decimal => 4,
            Self::Unknown(code) => code,
        }
    }

    /// Classify the declared type of the argument at `index`.
    pub const fn column_kind(self, index: usize) -> Result<ColumnKind, SetupError> {
        match self {
            Self::String => Ok(ColumnKind::Text),
            Self::Decimal => Ok(ColumnKind::Decimal),
            Self::Real => Ok(ColumnKind::Real),
            Self::Int => Ok(ColumnKind::Integer),
            Self::Row => Err(SetupError::row_not_supported(index)),
            Self::Unknown(code) => Err(SetupError::UnsupportedType { index, code }),
        }
    }
}

impl From<i32> for HostType {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

/// Decode one raw host argument for a slot of the given kind.
///
/// A numeric payload of the wrong width is passed through as raw text so the
/// slot treats it as a kind mismatch instead of aborting the row stream.
#[must_use]
pub fn decode_arg(kind: ColumnKind, arg: HostArg<'_>) -> ColumnValue<'_> {
    let Some(bytes) = arg else {
        return ColumnValue::Null;
    };

    match kind {
        ColumnKind::Text => ColumnValue::Text(bytes),
        ColumnKind::Decimal => ColumnValue::Decimal(bytes),
        ColumnKind::Real => <[u8; 8]>::try_from(bytes)
            .map_or(ColumnValue::Text(bytes), |raw| {
                ColumnValue::Real(f64::from_ne_bytes(raw))
            }),
        ColumnKind::Integer => <[u8; 8]>::try_from(bytes)
            .map_or(ColumnValue::Text(bytes), |raw| {
                ColumnValue::Integer(i64::from_ne_bytes(raw))
            }),
    }
}
