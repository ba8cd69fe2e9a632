//! Question types and their per-type limits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Length limits
// ---------------------------------------------------------------------------

/// Maximum length of a form title.
pub const FORM_TITLE_MAX_LENGTH: u64 = 100;

/// Maximum length of a question's prompt text.
pub const QUESTION_TEXT_MAX_LENGTH: u64 = 300;

/// Highest `max_length` a short text question may declare.
pub const SHORT_TEXT_MAX_LENGTH: i32 = 200;

/// Highest `max_length` a long text question may declare.
pub const LONG_TEXT_MAX_LENGTH: i32 = 5000;

/// Longest text answer accepted at the request layer, whatever the question type.
pub const ANSWER_TEXT_MAX_LENGTH: u64 = LONG_TEXT_MAX_LENGTH as u64;

/// Longest email answer accepted at the request layer.
pub const EMAIL_MAX_LENGTH: u64 = 254;

// ---------------------------------------------------------------------------
// QuestionType
// ---------------------------------------------------------------------------

/// The kind of answer a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    ShortText,
    LongText,
    Email,
    Number,
}

impl QuestionType {
    pub const ALL: [QuestionType; 4] = [
        QuestionType::ShortText,
        QuestionType::LongText,
        QuestionType::Email,
        QuestionType::Number,
    ];

    /// Wire and storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::ShortText => "short_text",
            QuestionType::LongText => "long_text",
            QuestionType::Email => "email",
            QuestionType::Number => "number",
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::ShortText => "short text",
            QuestionType::LongText => "long text",
            QuestionType::Email => "email",
            QuestionType::Number => "number",
        }
    }

    /// Whether answers to this type go into `text_answer`.
    pub fn is_text(self) -> bool {
        matches!(self, QuestionType::ShortText | QuestionType::LongText)
    }

    /// Upper bound for `max_length`, or `None` when the type has no length.
    pub fn max_length_ceiling(self) -> Option<i32> {
        match self {
            QuestionType::ShortText => Some(SHORT_TEXT_MAX_LENGTH),
            QuestionType::LongText => Some(LONG_TEXT_MAX_LENGTH),
            QuestionType::Email | QuestionType::Number => None,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::field("question_type", format!("\"{s}\" is not a valid choice."))
            })
    }
}

/// Lets `sqlx` decode the `question_type` TEXT column straight into the enum.
impl TryFrom<String> for QuestionType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_storage_name() {
        for t in QuestionType::ALL {
            assert_eq!(t.as_str().parse::<QuestionType>().unwrap(), t);
        }
    }

    #[test]
    fn rejects_unknown_type_on_question_type_field() {
        let err = "checkbox".parse::<QuestionType>().unwrap_err();
        assert_eq!(err.field_name(), Some("question_type"));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&QuestionType::LongText).unwrap();
        assert_eq!(json, "\"long_text\"");
        let parsed: QuestionType = serde_json::from_str("\"short_text\"").unwrap();
        assert_eq!(parsed, QuestionType::ShortText);
    }

    #[test]
    fn only_text_types_have_a_length_ceiling() {
        assert_eq!(QuestionType::ShortText.max_length_ceiling(), Some(200));
        assert_eq!(QuestionType::LongText.max_length_ceiling(), Some(5000));
        assert_eq!(QuestionType::Email.max_length_ceiling(), None);
        assert_eq!(QuestionType::Number.max_length_ceiling(), None);
    }
}
