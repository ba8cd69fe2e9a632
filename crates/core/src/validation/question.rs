//! Question rules: type-specific constraints checked on create and update.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::question::QuestionType;

/// The constraint-bearing part of a question.
///
/// Used both as the candidate passed to [`validate_question`] and as the
/// normalized result it returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRules {
    pub question_type: QuestionType,
    pub max_length: Option<i32>,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    #[serde(default)]
    pub allow_decimal: bool,
}

impl QuestionRules {
    /// Rules with no optional constraints set.
    pub fn new(question_type: QuestionType) -> Self {
        Self {
            question_type,
            max_length: None,
            min_value: None,
            max_value: None,
            allow_decimal: false,
        }
    }

    /// Effective length limit for a text answer: the declared `max_length`,
    /// else the type ceiling. `None` for non-text types.
    pub fn text_limit(&self) -> Option<usize> {
        let ceiling = self.question_type.max_length_ceiling()?;
        let limit = self.max_length.unwrap_or(ceiling);
        Some(usize::try_from(limit).unwrap_or(0))
    }

    /// Drop constraints that do not apply to the question type.
    fn normalized(&self) -> Self {
        let is_number = self.question_type == QuestionType::Number;
        Self {
            question_type: self.question_type,
            max_length: self.max_length.filter(|_| self.question_type.is_text()),
            min_value: self.min_value.filter(|_| is_number),
            max_value: self.max_value.filter(|_| is_number),
            allow_decimal: self.allow_decimal && is_number,
        }
    }
}

/// Validate a question's constraints and return the normalized rules.
///
/// Checks, in order:
/// - `max_length` must not be negative
/// - `max_length` must not exceed 200 for short text or 5000 for long text
/// - for number questions with both bounds set, `min_value <= max_value`
///
/// Email questions carry no extra constraints.
pub fn validate_question(rules: &QuestionRules) -> Result<QuestionRules, CoreError> {
    if let Some(max_length) = rules.max_length {
        if max_length < 0 {
            return Err(CoreError::field(
                "max_length",
                "Max length cannot be negative.",
            ));
        }
        if let Some(ceiling) = rules.question_type.max_length_ceiling() {
            if max_length > ceiling {
                return Err(CoreError::field(
                    "max_length",
                    format!(
                        "Max length for {} question cannot exceed {ceiling} characters.",
                        rules.question_type.label()
                    ),
                ));
            }
        }
    }

    if rules.question_type == QuestionType::Number {
        if let (Some(min), Some(max)) = (rules.min_value, rules.max_value) {
            if min > max {
                return Err(CoreError::field(
                    "min_value",
                    "Min value cannot be greater than max value.",
                ));
            }
        }
    }

    Ok(rules.normalized())
}
