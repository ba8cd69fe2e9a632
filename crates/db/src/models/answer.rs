//! Answer entity model and DTOs.

use forms_core::question::{ANSWER_TEXT_MAX_LENGTH, EMAIL_MAX_LENGTH};
use forms_core::types::{DbId, Timestamp};
use forms_core::validation::AnswerCandidate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidateEmail, ValidationError};

/// A row from the `answers` table. Exactly one of the three answer columns
/// is non-null.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub question_id: DbId,
    pub text_answer: Option<String>,
    pub numeric_answer: Option<f64>,
    pub email_answer: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for submitting an answer. Answers are immutable once stored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnswer {
    pub question_id: DbId,
    #[validate(length(
        max = ANSWER_TEXT_MAX_LENGTH,
        message = "Answer cannot exceed 5000 characters."
    ))]
    pub text_answer: Option<String>,
    pub numeric_answer: Option<f64>,
    #[validate(
        custom(function = "email_shape"),
        length(max = EMAIL_MAX_LENGTH, message = "Email cannot exceed 254 characters.")
    )]
    pub email_answer: Option<String>,
}

impl CreateAnswer {
    pub fn candidate(&self) -> AnswerCandidate {
        AnswerCandidate {
            text_answer: self.text_answer.clone(),
            numeric_answer: self.numeric_answer,
            email_answer: self.email_answer.clone(),
        }
    }
}

/// Empty strings are left to the engine, which treats them as "no answer".
fn email_shape(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Enter a valid email address.".into()))
    }
}
