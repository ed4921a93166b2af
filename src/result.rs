//! Caller-facing outcome of a validation call.

use crate::types::ValidationError;
use serde::{Deserialize, Serialize};

/// `{ "ok": bool, "error": string | null }`.
///
/// `ok` is true exactly when `error` is `None`. Construct through
/// [`ValidationResult::success`], [`ValidationResult::failure`] or `From`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<T> From<std::result::Result<T, ValidationError>> for ValidationResult {
    fn from(result: std::result::Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => Self::success(),
            Err(err) => Self::failure(err.message),
        }
    }
}

/// Response status reported to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// Body a request handler sends back: `{ "status": "ok"|"error", "error_message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ResponseStatus,
    pub error_message: Option<String>,
}

impl ApiResponse {
    /// HTTP status the handler should use (200 accepted, 400 rejected).
    pub fn status_code(&self) -> u16 {
        match self.status {
            ResponseStatus::Ok => 200,
            ResponseStatus::Error => 400,
        }
    }
}

impl From<&ValidationResult> for ApiResponse {
    fn from(result: &ValidationResult) -> Self {
        Self {
            status: if result.ok {
                ResponseStatus::Ok
            } else {
                ResponseStatus::Error
            },
            error_message: result.error.clone(),
        }
    }
}

impl From<ValidationResult> for ApiResponse {
    fn from(result: ValidationResult) -> Self {
        Self::from(&result)
    }
}
