//! Core types for the validator.
//!
//! - **Errors**: payload violations and operational errors (thiserror)
//! - **Config**: reference data and defaults, loadable from JSON

mod config;
mod errors;

pub use config::{GenerateDefaults, Limits, ValidatorConfig, DEFAULT_TOPICS};
pub use errors::{Error, Result, ValidationError, ViolationKind};
