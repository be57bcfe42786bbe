//! Stable machine-readable codes for request diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a request validation finding.
///
/// Serialized in `snake_case`; the strings are part of the public contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A value could not be interpreted (e.g. `"target_sentences": "many"`)
    InvalidValue,
    /// A value parsed but lies outside its allowed range
    OutOfRange,
    /// A runtime limit is set to an unusable value
    LimitExceeded,
    /// A field the schema does not recognize
    UnknownField,
    /// Generic failure, for custom rules
    ValidationFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidValue => "invalid_value",
            Self::OutOfRange => "out_of_range",
            Self::LimitExceeded => "limit_exceeded",
            Self::UnknownField => "unknown_field",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
