use std::fmt;
use thiserror::Error as ThisError;

///
/// SetupError
///
/// Rejection raised while a tracker is being set up.
/// Fatal to the whole evaluation: it is reported once, before any row is
/// processed, and no tracker instance is created.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SetupError {
    #[error("invalid argument type at column {index}: {reason}")]
    InvalidArgumentType { index: usize, reason: &'static str },

    #[error("unsupported argument type at column {index}: code {code}")]
    UnsupportedType { index: usize, code: i32 },
}

impl SetupError {
    /// Construct the rejection for a composite row argument.
    pub(crate) const fn row_not_supported(index: usize) -> Self {
        Self::InvalidArgumentType {
            index,
            reason: "ROW not supported",
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidArgumentType { .. } => ErrorClass::InvalidArgument,
            Self::UnsupportedType { .. } => ErrorClass::Unsupported,
        }
    }

    /// Zero-based position of the offending column argument.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::InvalidArgumentType { index, .. } | Self::UnsupportedType { index, .. } => *index,
        }
    }

    /// Message text handed back to the host's setup error buffer.
    #[must_use]
    pub const fn host_message(&self) -> &'static str {
        match self {
            Self::InvalidArgumentType { .. } => "wrong argument type - should not be ROW",
            Self::UnsupportedType { .. } => "unknown argument type - please update library code",
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("setup:{}: {self}", self.class())
    }
}

///
/// ErrorClass
/// Error taxonomy for setup classification.
/// Not a stable API; may change without notice.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidArgument,
    Unsupported,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Unsupported => "unsupported",
        };
        write!(f, "{label}")
    }
}
