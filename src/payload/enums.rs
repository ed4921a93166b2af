//! Closed vocabularies accepted in request payloads.
//!
//! Every enum serializes to the exact wire string and can be parsed back from it.
//! Parsing is case-sensitive; only topics are matched case-insensitively and
//! those live in [`crate::types::ValidatorConfig`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Define a closed string vocabulary.
///
/// Generates: enum, `ALL`, `parse()`, `as_str()`, Display, Serialize, Deserialize, JsonSchema.
macro_rules! define_choice {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_choice!(
    /// Session mode of a generate request.
    Mode {
        Single => "single",
        Multiplayer => "multiplayer",
    }
);

define_choice!(
    /// Requested difficulty.
    Difficulty {
        Easy => "easy",
        Medium => "medium",
        Hard => "hard",
        Mixed => "mixed",
    }
);

define_choice!(
    /// Requested question format for a generated quiz.
    QuestionFormat {
        Mcq => "mcq",
        Coding => "coding",
        Mixed => "mixed",
    }
);

define_choice!(
    /// Type of a single question inside a source package.
    QuestionType {
        Mcq => "mcq",
        Coding => "coding",
    }
);

define_choice!(
    /// Operation requested on an existing quiz package.
    EditAction {
        Add => "add",
        Remove => "remove",
        Replace => "replace",
        Modify => "modify",
        Shuffle => "shuffle",
        AdjustScoring => "adjust_scoring",
        AdjustDifficulty => "adjust_difficulty",
        AdjustTopic => "adjust_topic",
        RegenerateTests => "regenerate_tests",
        RewriteExplanations => "rewrite_explanations",
        Sanitize => "sanitize",
    }
);

impl Mode {
    pub fn is_multiplayer(self) -> bool {
        matches!(self, Mode::Multiplayer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_wire_strings() {
        for action in EditAction::ALL {
            assert_eq!(EditAction::parse(action.as_str()), Some(*action));
        }
        assert_eq!(EditAction::ALL.len(), 11);
        assert_eq!(Mode::parse("multiplayer"), Some(Mode::Multiplayer));
        assert_eq!(QuestionType::parse("coding"), Some(QuestionType::Coding));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Mode::parse("Single"), None);
        assert_eq!(Difficulty::parse("HARD"), None);
        assert_eq!(EditAction::parse(" shuffle"), None);
    }

    #[test]
    fn test_question_type_excludes_mixed() {
        assert_eq!(QuestionFormat::parse("mixed"), Some(QuestionFormat::Mixed));
        assert_eq!(QuestionType::parse("mixed"), None);
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_value(EditAction::RewriteExplanations).unwrap();
        assert_eq!(json, "rewrite_explanations");
        let back: Difficulty = serde_json::from_value(serde_json::json!("medium")).unwrap();
        assert_eq!(back, Difficulty::Medium);
    }

    #[test]
    fn test_display() {
        assert_eq!(QuestionFormat::Coding.to_string(), "coding");
        assert!(Mode::Multiplayer.is_multiplayer());
        assert!(!Mode::Single.is_multiplayer());
    }
}
