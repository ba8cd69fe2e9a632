//! Question entity model and DTOs.

use forms_core::question::{QuestionType, QUESTION_TEXT_MAX_LENGTH};
use forms_core::types::DbId;
use forms_core::validation::QuestionRules;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub form_id: DbId,
    pub text: String,
    pub required: bool,
    #[sqlx(try_from = "String")]
    pub question_type: QuestionType,
    pub max_length: Option<i32>,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    pub allow_decimal: bool,
}

impl Question {
    /// The constraints answers to this question are checked against.
    pub fn rules(&self) -> QuestionRules {
        QuestionRules {
            question_type: self.question_type,
            max_length: self.max_length,
            min_value: self.min_value,
            max_value: self.max_value,
            allow_decimal: self.allow_decimal,
        }
    }

    /// Overlay a partial update on this row, producing the full record to
    /// revalidate and write back.
    pub fn merged_with(&self, patch: &UpdateQuestion) -> CreateQuestion {
        CreateQuestion {
            form_id: Some(patch.form_id.unwrap_or(self.form_id)),
            text: patch.text.clone().unwrap_or_else(|| self.text.clone()),
            required: patch.required.unwrap_or(self.required),
            question_type: patch.question_type.unwrap_or(self.question_type),
            max_length: patch.max_length.or(self.max_length),
            min_value: patch.min_value.or(self.min_value),
            max_value: patch.max_value.or(self.max_value),
            allow_decimal: patch.allow_decimal.unwrap_or(self.allow_decimal),
        }
    }
}

fn default_required() -> bool {
    true
}

/// DTO for creating a question.
///
/// `form_id` may be omitted when the form comes from the URL path
/// (`/forms/{form_id}/questions`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestion {
    pub form_id: Option<DbId>,
    #[validate(length(
        min = 1,
        max = QUESTION_TEXT_MAX_LENGTH,
        message = "Text must be between 1 and 300 characters."
    ))]
    pub text: String,
    #[serde(default = "default_required")]
    pub required: bool,
    pub question_type: QuestionType,
    pub max_length: Option<i32>,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    #[serde(default)]
    pub allow_decimal: bool,
}

impl CreateQuestion {
    pub fn rules(&self) -> QuestionRules {
        QuestionRules {
            question_type: self.question_type,
            max_length: self.max_length,
            min_value: self.min_value,
            max_value: self.max_value,
            allow_decimal: self.allow_decimal,
        }
    }

    /// Replace the constraint fields with validated, normalized rules.
    pub fn with_rules(self, rules: QuestionRules) -> Self {
        Self {
            question_type: rules.question_type,
            max_length: rules.max_length,
            min_value: rules.min_value,
            max_value: rules.max_value,
            allow_decimal: rules.allow_decimal,
            ..self
        }
    }
}

/// DTO for updating a question. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateQuestion {
    pub form_id: Option<DbId>,
    #[validate(length(
        min = 1,
        max = QUESTION_TEXT_MAX_LENGTH,
        message = "Text must be between 1 and 300 characters."
    ))]
    pub text: Option<String>,
    pub required: Option<bool>,
    pub question_type: Option<QuestionType>,
    pub max_length: Option<i32>,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    pub allow_decimal: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(len: usize) -> CreateQuestion {
        CreateQuestion {
            form_id: Some(1),
            text: "q".repeat(len),
            required: true,
            question_type: QuestionType::ShortText,
            max_length: None,
            min_value: None,
            max_value: None,
            allow_decimal: false,
        }
    }

    #[test]
    fn text_length_is_bounded_by_the_core_limit() {
        assert!(prompt(QUESTION_TEXT_MAX_LENGTH as usize).validate().is_ok());
        let errors = prompt(QUESTION_TEXT_MAX_LENGTH as usize + 1)
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("text"));
    }

    #[test]
    fn patch_text_shares_the_limit() {
        let patch = UpdateQuestion {
            text: Some("q".repeat(QUESTION_TEXT_MAX_LENGTH as usize + 1)),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
        assert!(UpdateQuestion::default().validate().is_ok());
    }
}
