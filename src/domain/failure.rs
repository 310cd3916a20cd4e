use std::fmt;

use thiserror::Error;

use crate::domain::pointer::PointerError;

/// Textual formats a resolved value can be required to parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Uuid,
    LocalDateTime,
}

impl ValueFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uuid => "UUID",
            Self::LocalDateTime => "LocalDateTime",
        }
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a pointer assertion did not hold.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssertionFailure {
    /// Pointer did not resolve but presence was required.
    #[error("Expected JSON object to contain value at [{pointer}]")]
    Missing { pointer: String },

    /// Unquoted text does not parse as the required format.
    #[error("Expected value [{text}] at [{pointer}] to be convertible to {format}")]
    Format {
        pointer: String,
        text: String,
        format: ValueFormat,
    },

    /// Empty string or empty array.
    #[error("Expected value at [{pointer}] to be not empty")]
    Empty { pointer: String },

    #[error("Expected value [{text}] at [{pointer}] to be equal to [{expected}]")]
    Unequal {
        pointer: String,
        text: String,
        expected: String,
    },

    #[error("Expected value [{text}] at [{pointer}] not to be equal to [{expected}]")]
    Equal {
        pointer: String,
        text: String,
        expected: String,
    },

    #[error(transparent)]
    InvalidPointer(#[from] PointerError),
}

impl AssertionFailure {
    /// Stable snake_case label used in machine-readable reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing_value",
            Self::Format { .. } => "format_mismatch",
            Self::Empty { .. } => "empty_value",
            Self::Unequal { .. } => "equality_mismatch",
            Self::Equal { .. } => "inequality_mismatch",
            Self::InvalidPointer(_) => "invalid_pointer",
        }
    }

    pub fn pointer(&self) -> &str {
        match self {
            Self::Missing { pointer }
            | Self::Format { pointer, .. }
            | Self::Empty { pointer }
            | Self::Unequal { pointer, .. }
            | Self::Equal { pointer, .. } => pointer,
            Self::InvalidPointer(error) => error.input(),
        }
    }
}
