//! EDIT payloads: a request to change an existing quiz package.
//!
//! Only the edit instruction and the structural fields of each question are
//! checked. Question bodies (prompts, options, tests) pass through untouched.

use super::enums::{EditAction, QuestionType};
use super::fields::{as_integer, as_positive_integer, display_value, non_blank_str, non_null};
use crate::types::{ValidationError, ValidatorConfig};
use serde::Serialize;
use serde_json::{Map, Value};

/// Keys that mark a payload as an edit request.
pub const EDIT_KEYS: [&str; 2] = ["source_package", "edit_request"];

/// Which questions an edit applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum Targets {
    /// The literal string `"all"`.
    All,
    /// Explicit entries, usually `q_id` strings. Element types are not checked.
    Listed(Vec<Value>),
}

impl Serialize for Targets {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Targets::All => serializer.serialize_str("all"),
            Targets::Listed(items) => items.serialize(serializer),
        }
    }
}

/// The `edit_request` part of an edit payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditInstruction {
    pub action: EditAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub targets: Option<Targets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

/// One question of the source package.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceQuestion {
    pub q_id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Lowercased topic.
    pub topic: String,
    pub time_limit_seconds: u64,
    /// The question object as supplied.
    pub body: Map<String, Value>,
}

/// The `source_package` part of an edit payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourcePackage {
    /// `None` when the package has no `questions` array.
    pub questions: Option<Vec<SourceQuestion>>,
    /// The package object as supplied.
    pub body: Map<String, Value>,
}

/// A validated edit request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditRequest {
    pub source_package: SourcePackage,
    pub edit_request: EditInstruction,
}

impl EditRequest {
    /// Parse an edit payload. The first failing check wins.
    pub fn parse(
        map: &Map<String, Value>,
        config: &ValidatorConfig,
    ) -> Result<Self, ValidationError> {
        let (Some(source), Some(edit)) = (map.get("source_package"), map.get("edit_request"))
        else {
            let missing = EDIT_KEYS
                .iter()
                .find(|k| !map.contains_key(**k))
                .copied()
                .unwrap_or_default();
            return Err(ValidationError::missing(
                missing,
                "EDIT MODE ERROR: Both 'source_package' and 'edit_request' must be provided.",
            ));
        };
        let source = source.as_object().ok_or_else(|| {
            ValidationError::wrong_type("source_package", "'source_package' must be an object.")
        })?;
        let edit = edit.as_object().ok_or_else(|| {
            ValidationError::wrong_type("edit_request", "'edit_request' must be an object.")
        })?;

        let edit_request = parse_instruction(edit)?;

        let questions = match source.get("questions").and_then(Value::as_array) {
            None => None,
            Some(items) => Some(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| parse_question(index, item, config))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };

        Ok(Self {
            source_package: SourcePackage {
                questions,
                body: source.clone(),
            },
            edit_request,
        })
    }
}

fn parse_instruction(edit: &Map<String, Value>) -> Result<EditInstruction, ValidationError> {
    let action = edit.get("action");
    let action = action
        .and_then(non_blank_str)
        .and_then(EditAction::parse)
        .ok_or_else(|| {
            ValidationError::invalid_enum(
                "edit_request.action",
                format!("Invalid edit action: {}.", display_value(action)),
            )
        })?;

    // An explicit null is still a supplied value for targets.
    let targets = match edit.get("targets") {
        None => None,
        Some(Value::String(s)) if s == "all" => Some(Targets::All),
        Some(Value::Array(items)) => Some(Targets::Listed(items.clone())),
        Some(_) => {
            return Err(ValidationError::wrong_type(
                "edit_request.targets",
                "'targets' must be a list or 'all'.",
            ))
        }
    };

    let count = match non_null(edit, "count") {
        None => None,
        Some(v) => Some(as_integer(v).ok_or_else(|| {
            ValidationError::wrong_type(
                "edit_request.count",
                "'count' must be an integer when provided in edit_request.",
            )
        })?),
    };

    Ok(EditInstruction {
        action,
        targets,
        count,
    })
}

fn parse_question(
    index: usize,
    item: &Value,
    config: &ValidatorConfig,
) -> Result<SourceQuestion, ValidationError> {
    let field = |name: &str| format!("source_package.questions[{index}].{name}");

    let q = item.as_object().ok_or_else(|| {
        ValidationError::wrong_type(
            format!("source_package.questions[{index}]"),
            "Each question must be an object.",
        )
    })?;

    let q_id = q
        .get("q_id")
        .and_then(non_blank_str)
        .ok_or_else(|| {
            ValidationError::missing(field("q_id"), "Each question must have a non-empty q_id.")
        })?
        .to_string();

    let question_type = q
        .get("type")
        .and_then(Value::as_str)
        .and_then(QuestionType::parse)
        .ok_or_else(|| {
            ValidationError::invalid_enum(field("type"), "Question type must be mcq or coding.")
        })?;

    let topic = q.get("topic");
    let topic = topic
        .and_then(non_blank_str)
        .filter(|t| config.is_allowed_topic(t))
        .map(str::to_lowercase)
        .ok_or_else(|| {
            ValidationError::invalid_enum(
                field("topic"),
                format!("Invalid question topic: {}.", display_value(topic)),
            )
        })?;

    let time_limit_seconds = q
        .get("time_limit_seconds")
        .and_then(as_positive_integer)
        .ok_or_else(|| {
            ValidationError::out_of_range(
                field("time_limit_seconds"),
                "time_limit_seconds must be positive integer.",
            )
        })?;

    if question_type == QuestionType::Coding {
        check_hidden_tests(q, &q_id, config.limits.min_hidden_tests).map_err(|message| {
            ValidationError::out_of_range(field("hidden_answer.hidden_tests"), message)
        })?;
    }

    Ok(SourceQuestion {
        q_id,
        question_type,
        topic,
        time_limit_seconds,
        body: q.clone(),
    })
}

/// A coding question that ships its hidden answer must carry enough hidden tests.
fn check_hidden_tests(q: &Map<String, Value>, q_id: &str, min: usize) -> Result<(), String> {
    let Some(hidden_answer) = q.get("hidden_answer").and_then(Value::as_object) else {
        return Ok(());
    };
    let count = hidden_answer
        .get("hidden_tests")
        .and_then(Value::as_array)
        .map(Vec::len);
    match count {
        Some(n) if n >= min => Ok(()),
        _ => Err(format!(
            "hidden_tests must be a list with at least {min} tests (question {q_id})."
        )),
    }
}
