//! Application error types.
//!
//! Two families live here:
//! - [`ValidationError`]: a payload was rejected. Carries the offending field and
//!   the exact message handed back to the caller.
//! - [`Error`]: something went wrong around validation (config loading, I/O).

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Operational errors (never produced by validating a payload).
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid validator configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Category of a payload violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingField,
    WrongType,
    OutOfRange,
    InvalidEnumValue,
    CrossField,
}

impl ViolationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::MissingField => "missing_field",
            ViolationKind::WrongType => "wrong_type",
            ViolationKind::OutOfRange => "out_of_range",
            ViolationKind::InvalidEnumValue => "invalid_enum_value",
            ViolationKind::CrossField => "cross_field",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected payload. `Display` yields the caller-facing message unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ViolationKind,
    /// Dotted path of the offending field (`""` for the payload itself).
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ViolationKind, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::MissingField, field, message)
    }

    pub fn wrong_type(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::WrongType, field, message)
    }

    pub fn out_of_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::OutOfRange, field, message)
    }

    pub fn invalid_enum(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::InvalidEnumValue, field, message)
    }

    pub fn cross_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ViolationKind::CrossField, field, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_message_only() {
        let message = "'num_questions' must be an integer >=1.";
        let err = ValidationError::out_of_range("num_questions", message);
        assert_eq!(err.to_string(), message);
        assert_eq!(err.kind, ViolationKind::OutOfRange);
        assert_eq!(err.field, "num_questions");
    }

    #[test]
    fn config_error_is_prefixed() {
        assert_eq!(Error::config("no topics").to_string(), "config error: no topics");
    }

    #[test]
    fn violation_kind_serializes_snake_case() {
        let json = serde_json::to_value(ViolationKind::InvalidEnumValue).unwrap();
        assert_eq!(json, "invalid_enum_value");
    }
}
