//! GENERATE payloads: a request to build a new quiz session.

use super::enums::{Difficulty, Mode, QuestionFormat};
use super::fields::{as_integer, as_positive_integer, non_blank_str, non_null, round_half_up};
use crate::types::{ValidationError, ValidatorConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys that mark a payload as a generate request.
pub const GENERATE_KEYS: [&str; 3] = ["mode", "session_id", "num_questions"];

/// Percentage split between multiple-choice and coding questions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Mix {
    pub mcq_percent: f64,
    pub coding_percent: f64,
}

impl Default for Mix {
    fn default() -> Self {
        Self {
            mcq_percent: 80.0,
            coding_percent: 20.0,
        }
    }
}

impl Mix {
    pub fn total(&self) -> f64 {
        self.mcq_percent + self.coding_percent
    }

    /// The two shares add up to 100 once rounded to the nearest integer.
    pub fn sums_to_hundred(&self) -> bool {
        round_half_up(self.total()) == 100.0
    }
}

/// A validated generate request with every default filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub mode: Mode,
    pub session_id: String,
    pub num_questions: u64,
    /// Requested topics, lowercased. Empty entries are dropped.
    pub topics: Vec<String>,
    pub difficulty: Difficulty,
    pub format: QuestionFormat,
    pub mix: Mix,
    pub time_per_question_seconds: Option<u64>,
    pub seed: Option<i64>,
    /// Player entries as supplied; only their count is checked.
    pub players: Vec<Value>,
}

impl GenerateRequest {
    /// Parse a generate payload. Checks run in a fixed order and the first
    /// failure is returned.
    pub fn parse(
        map: &Map<String, Value>,
        config: &ValidatorConfig,
    ) -> Result<Self, ValidationError> {
        for key in GENERATE_KEYS {
            if !map.contains_key(key) {
                return Err(ValidationError::missing(
                    key,
                    format!("GENERATE MODE ERROR: Missing required field '{key}'."),
                ));
            }
        }

        let mode = map
            .get("mode")
            .and_then(Value::as_str)
            .and_then(Mode::parse)
            .ok_or_else(|| {
                ValidationError::invalid_enum(
                    "mode",
                    "Field 'mode' must be 'single' or 'multiplayer'.",
                )
            })?;

        let session_id = map
            .get("session_id")
            .and_then(non_blank_str)
            .ok_or_else(|| {
                ValidationError::wrong_type(
                    "session_id",
                    "'session_id' must be a non-empty string.",
                )
            })?
            .to_string();

        let num_questions = map
            .get("num_questions")
            .and_then(as_positive_integer)
            .ok_or_else(|| {
                ValidationError::out_of_range(
                    "num_questions",
                    "'num_questions' must be an integer >=1.",
                )
            })?;

        let topics = parse_topics(non_null(map, "topics"), config)?;

        let difficulty = match non_null(map, "difficulty") {
            None => config.defaults.difficulty,
            Some(v) => v.as_str().and_then(Difficulty::parse).ok_or_else(|| {
                ValidationError::invalid_enum("difficulty", "Invalid difficulty.")
            })?,
        };

        let format = match non_null(map, "format") {
            None => config.defaults.format,
            Some(v) => v
                .as_str()
                .and_then(QuestionFormat::parse)
                .ok_or_else(|| ValidationError::invalid_enum("format", "Invalid format."))?,
        };

        let mix = match non_null(map, "mix") {
            None => config.defaults.mix,
            Some(v) => parse_mix(v)?,
        };

        // Present-but-null is still a bad value here.
        let time_per_question_seconds = match map.get("time_per_question_seconds") {
            None => None,
            Some(v) => Some(as_positive_integer(v).ok_or_else(|| {
                ValidationError::out_of_range(
                    "time_per_question_seconds",
                    "'time_per_question_seconds' must be a positive integer.",
                )
            })?),
        };

        let seed = match non_null(map, "seed") {
            None => None,
            Some(v) => Some(as_integer(v).ok_or_else(|| {
                ValidationError::wrong_type("seed", "'seed' must be an integer when provided.")
            })?),
        };

        let players = map
            .get("players")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let min_players = config.limits.min_multiplayer_players;
        if mode.is_multiplayer() && players.len() < min_players {
            return Err(ValidationError::cross_field(
                "players",
                format!(
                    "Multiplayer requires at least {} players.",
                    count_word(min_players)
                ),
            ));
        }

        Ok(Self {
            mode,
            session_id,
            num_questions,
            topics,
            difficulty,
            format,
            mix,
            time_per_question_seconds,
            seed,
            players,
        })
    }
}

/// Small counts read as words in messages ("two players").
fn count_word(n: usize) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS.get(n).map_or_else(|| n.to_string(), |w| w.to_string())
}

fn parse_topics(
    value: Option<&Value>,
    config: &ValidatorConfig,
) -> Result<Vec<String>, ValidationError> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let items = value
        .as_array()
        .ok_or_else(|| ValidationError::wrong_type("topics", "'topics' must be an array."))?;

    let mut topics = Vec::with_capacity(items.len());
    for item in items {
        let topic = item
            .as_str()
            .ok_or_else(|| ValidationError::wrong_type("topics", "Each topic must be a string."))?;
        if topic.is_empty() {
            continue;
        }
        if !config.is_allowed_topic(topic) {
            return Err(ValidationError::invalid_enum(
                "topics",
                format!("Invalid topic: {topic}."),
            ));
        }
        topics.push(topic.to_lowercase());
    }
    Ok(topics)
}

fn parse_mix(value: &Value) -> Result<Mix, ValidationError> {
    let obj = value
        .as_object()
        .ok_or_else(|| ValidationError::wrong_type("mix", "'mix' must be an object."))?;

    let percent = |key: &str| obj.get(key).and_then(Value::as_f64);
    let (Some(mcq_percent), Some(coding_percent)) =
        (percent("mcq_percent"), percent("coding_percent"))
    else {
        return Err(ValidationError::wrong_type(
            "mix",
            "Mix percentages must be numeric.",
        ));
    };

    let mix = Mix {
        mcq_percent,
        coding_percent,
    };
    if !mix.sums_to_hundred() {
        return Err(ValidationError::cross_field(
            "mix",
            "Mix percentages must add up to 100.",
        ));
    }
    Ok(mix)
}
