//! # quizgate - request payload validation for the quiz service
//!
//! Checks request bodies before the quiz service acts on them:
//! - GENERATE payloads: create a new single or multiplayer quiz session
//! - EDIT payloads: change an existing quiz package
//!
//! Every check is a pure function of the payload and an immutable
//! [`ValidatorConfig`]. The first violation found is reported as a
//! [`ValidationResult`] with a human-readable message.
//!
//! ```
//! use serde_json::json;
//!
//! let result = quizgate::validate(&json!({
//!     "mode": "single",
//!     "session_id": "abc",
//!     "num_questions": 5,
//! }));
//! assert!(result.ok);
//! assert_eq!(result.error, None);
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod payload;
pub mod result;
pub mod types;
pub mod validator;

// Internal utilities
pub mod observability;

pub use payload::{EditRequest, GenerateRequest, Intent, Payload};
pub use result::{ApiResponse, ResponseStatus, ValidationResult};
pub use types::{Error, Result, ValidationError, ValidatorConfig, ViolationKind};
pub use validator::{global, init, validate, Validator};
