//! Payload validator.
//!
//! [`Validator`] is immutable once built and holds no per-call state, so a
//! single instance can be shared freely across threads. A process-wide
//! instance is available through [`init`] / [`global`].

use crate::payload::fields::value_type_name;
use crate::payload::Payload;
use crate::result::ValidationResult;
use crate::types::{Error, Result, ValidationError, ValidatorConfig};
use serde_json::Value;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Validator> = OnceLock::new();

/// Checks GENERATE and EDIT payloads against a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Parse a payload into its typed form, or return the first violation.
    pub fn parse(&self, payload: &Value) -> std::result::Result<Payload, ValidationError> {
        let parsed = Payload::parse(payload, &self.config);
        match &parsed {
            Ok(p) => tracing::debug!(intent = ?p.intent(), "payload accepted"),
            Err(err) => tracing::debug!(
                field = %err.field,
                kind = %err.kind,
                payload_type = value_type_name(payload),
                error = %err.message,
                "payload rejected"
            ),
        }
        parsed
    }

    /// Validate a payload. Never panics; every problem becomes a failed result.
    pub fn validate(&self, payload: &Value) -> ValidationResult {
        self.parse(payload).into()
    }

    /// Validate a raw request body.
    pub fn validate_json(&self, body: &str) -> ValidationResult {
        match serde_json::from_str::<Value>(body) {
            Ok(payload) => self.validate(&payload),
            Err(err) => {
                tracing::debug!(error = %err, "request body is not valid JSON");
                ValidationResult::failure("Invalid JSON")
            }
        }
    }
}

/// Install the process-wide validator. Only the first call succeeds, and it
/// must happen before anything reads [`global`].
pub fn init(config: ValidatorConfig) -> Result<&'static Validator> {
    let mut installed = false;
    let validator = GLOBAL.get_or_init(|| {
        installed = true;
        Validator::new(config)
    });
    if !installed {
        return Err(Error::config("validator already initialised"));
    }
    Ok(validator)
}

/// The process-wide validator (built-in configuration unless [`init`] ran first).
pub fn global() -> &'static Validator {
    GLOBAL.get_or_init(Validator::default)
}

/// Validate a payload with the process-wide validator.
pub fn validate(payload: &Value) -> ValidationResult {
    global().validate(payload)
}
