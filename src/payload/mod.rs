//! Request payloads — intent detection and typed parsing.
//!
//! A raw JSON body is classified by its top-level keys, then parsed into the
//! matching typed request:
//! ```text
//!   Value ──► Intent::Edit      ──► EditRequest::parse     ──► Payload::Edit
//!         └─► Intent::Generate  ──► GenerateRequest::parse ──► Payload::Generate
//!         └─► neither / not an object ──► ValidationError
//! ```

pub mod edit;
pub mod enums;
pub mod fields;
pub mod generate;

pub use edit::{EditInstruction, EditRequest, SourcePackage, SourceQuestion, Targets, EDIT_KEYS};
pub use enums::{Difficulty, EditAction, Mode, QuestionFormat, QuestionType};
pub use generate::{GenerateRequest, Mix, GENERATE_KEYS};

use crate::types::{ValidationError, ValidatorConfig};
use serde::Serialize;
use serde_json::{Map, Value};

/// What a payload asks for, decided from its keys alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Generate,
    Edit,
}

impl Intent {
    /// Classify a payload. Edit keys take precedence over generate keys.
    pub fn detect(payload: &Value) -> Result<(Intent, &Map<String, Value>), ValidationError> {
        let map = payload
            .as_object()
            .ok_or_else(|| ValidationError::wrong_type("", "Payload must be an object."))?;

        if EDIT_KEYS.iter().any(|k| map.contains_key(*k)) {
            return Ok((Intent::Edit, map));
        }
        if GENERATE_KEYS.iter().any(|k| map.contains_key(*k)) {
            return Ok((Intent::Generate, map));
        }
        Err(ValidationError::missing(
            "",
            "Missing payload: provide GENERATE or EDIT fields.",
        ))
    }
}

/// A payload that passed every check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Payload {
    Generate(GenerateRequest),
    Edit(EditRequest),
}

impl Payload {
    pub fn parse(payload: &Value, config: &ValidatorConfig) -> Result<Self, ValidationError> {
        let (intent, map) = Intent::detect(payload)?;
        tracing::debug!(intent = ?intent, "payload intent detected");
        match intent {
            Intent::Generate => GenerateRequest::parse(map, config).map(Payload::Generate),
            Intent::Edit => EditRequest::parse(map, config).map(Payload::Edit),
        }
    }

    pub fn intent(&self) -> Intent {
        match self {
            Payload::Generate(_) => Intent::Generate,
            Payload::Edit(_) => Intent::Edit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_non_object() {
        for value in [json!(null), json!([]), json!("x"), json!(3)] {
            let err = Intent::detect(&value).unwrap_err();
            assert_eq!(err.message, "Payload must be an object.");
        }
    }

    #[test]
    fn test_detect_prefers_edit() {
        let value = json!({"mode": "single", "edit_request": {}});
        assert_eq!(Intent::detect(&value).unwrap().0, Intent::Edit);
    }

    #[test]
    fn test_detect_generate_on_any_key() {
        for key in GENERATE_KEYS {
            let mut map = Map::new();
            map.insert(key.to_string(), Value::Null);
            assert_eq!(Intent::detect(&Value::Object(map)).unwrap().0, Intent::Generate);
        }
    }

    #[test]
    fn test_detect_neither() {
        let err = Intent::detect(&json!({"topics": ["ada"]})).unwrap_err();
        assert_eq!(err.message, "Missing payload: provide GENERATE or EDIT fields.");
    }

    #[test]
    fn test_parse_tags_intent() {
        let config = ValidatorConfig::default();
        let payload = Payload::parse(
            &json!({"mode": "single", "session_id": "abc", "num_questions": 5}),
            &config,
        )
        .unwrap();
        assert_eq!(payload.intent(), Intent::Generate);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["intent"], "generate");
        assert_eq!(json["difficulty"], "mixed");
        assert_eq!(json["mix"]["mcq_percent"], 80.0);
    }
}
