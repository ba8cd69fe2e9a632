//! Answer admission.
//!
//! A proposed answer is either rejected with a single error or accepted as
//! an [`AnswerValue`]. Rules run in a fixed order and the first failure
//! wins:
//!
//! 1. exclusivity: at most one of the three answer fields is populated
//! 2. uniqueness: no answer exists yet for the question
//! 3. type dispatch: the populated field matches the question type and
//!    satisfies its constraints
//!
//! An accepted answer is never revalidated; there is no update path.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::question::QuestionType;
use crate::validation::question::QuestionRules;

pub const ONLY_ONE_ANSWER_TYPE: &str = "Only one type of answer can be provided for a single question.";
pub const ANSWER_ALREADY_EXISTS: &str = "An answer already exists for this question.";

/// The three mutually exclusive answer fields as submitted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnswerCandidate {
    pub text_answer: Option<String>,
    pub numeric_answer: Option<f64>,
    pub email_answer: Option<String>,
}

impl AnswerCandidate {
    fn text(&self) -> Option<&str> {
        self.text_answer.as_deref().filter(|s| !s.is_empty())
    }

    fn email(&self) -> Option<&str> {
        self.email_answer.as_deref().filter(|s| !s.is_empty())
    }

    /// Number of answer fields that carry a value. Empty strings do not count.
    pub fn populated_count(&self) -> usize {
        [
            self.text().is_some(),
            self.numeric_answer.is_some(),
            self.email().is_some(),
        ]
        .into_iter()
        .filter(|populated| *populated)
        .count()
    }
}

/// An accepted answer: exactly one typed value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    Text(String),
    Number(f64),
    Email(String),
}

impl AnswerValue {
    pub fn text_answer(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn numeric_answer(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn email_answer(&self) -> Option<&str> {
        match self {
            AnswerValue::Email(s) => Some(s),
            _ => None,
        }
    }
}

/// Decide whether `candidate` may be stored as the answer to `question`.
///
/// `answer_exists` is the result of the caller's store lookup for an
/// existing answer to the same question.
pub fn validate_answer(
    candidate: &AnswerCandidate,
    question: &QuestionRules,
    answer_exists: bool,
) -> Result<AnswerValue, CoreError> {
    if candidate.populated_count() > 1 {
        return Err(CoreError::Validation(ONLY_ONE_ANSWER_TYPE.to_string()));
    }

    if answer_exists {
        return Err(CoreError::Validation(ANSWER_ALREADY_EXISTS.to_string()));
    }

    match question.question_type {
        QuestionType::ShortText | QuestionType::LongText => check_text(candidate, question),
        QuestionType::Number => check_number(candidate, question),
        QuestionType::Email => check_email(candidate),
    }
}

fn check_text(candidate: &AnswerCandidate, question: &QuestionRules) -> Result<AnswerValue, CoreError> {
    let text = candidate.text().ok_or_else(|| {
        CoreError::field(
            "text_answer",
            "Text answer is required for text type questions.",
        )
    })?;

    if let Some(limit) = question.text_limit() {
        if text.chars().count() > limit {
            return Err(CoreError::field(
                "text_answer",
                format!("Answer cannot exceed {limit} characters."),
            ));
        }
    }

    Ok(AnswerValue::Text(text.to_string()))
}

fn check_number(
    candidate: &AnswerCandidate,
    question: &QuestionRules,
) -> Result<AnswerValue, CoreError> {
    let value = candidate.numeric_answer.ok_or_else(|| {
        CoreError::field(
            "numeric_answer",
            "Numeric answer is required for number type questions.",
        )
    })?;

    if !value.is_finite() {
        return Err(CoreError::field(
            "numeric_answer",
            "Answer must be a finite number.",
        ));
    }
    if !question.allow_decimal && value.fract() != 0.0 {
        return Err(CoreError::field(
            "numeric_answer",
            "Answer must be a whole number.",
        ));
    }
    if let Some(min) = question.min_value {
        if value < f64::from(min) {
            return Err(CoreError::field(
                "numeric_answer",
                format!("Answer must be greater than or equal to {min}."),
            ));
        }
    }
    if let Some(max) = question.max_value {
        if value > f64::from(max) {
            return Err(CoreError::field(
                "numeric_answer",
                format!("Answer must be less than or equal to {max}."),
            ));
        }
    }

    Ok(AnswerValue::Number(value))
}

fn check_email(candidate: &AnswerCandidate) -> Result<AnswerValue, CoreError> {
    let email = candidate.email().ok_or_else(|| {
        CoreError::field(
            "email_answer",
            "Email answer is required for email type questions.",
        )
    })?;
    Ok(AnswerValue::Email(email.to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn text(s: &str) -> AnswerCandidate {
        AnswerCandidate {
            text_answer: Some(s.to_string()),
            ..Default::default()
        }
    }

    fn numeric(n: f64) -> AnswerCandidate {
        AnswerCandidate {
            numeric_answer: Some(n),
            ..Default::default()
        }
    }

    fn email(s: &str) -> AnswerCandidate {
        AnswerCandidate {
            email_answer: Some(s.to_string()),
            ..Default::default()
        }
    }

    fn short_text(max_length: i32) -> QuestionRules {
        QuestionRules {
            max_length: Some(max_length),
            ..QuestionRules::new(QuestionType::ShortText)
        }
    }

    fn number_between(min: i32, max: i32) -> QuestionRules {
        QuestionRules {
            min_value: Some(min),
            max_value: Some(max),
            ..QuestionRules::new(QuestionType::Number)
        }
    }

    // -- exclusivity ---------------------------------------------------------

    #[test]
    fn two_populated_fields_is_a_non_field_error() {
        let candidate = AnswerCandidate {
            text_answer: Some("x".into()),
            numeric_answer: Some(25.0),
            email_answer: None,
        };
        for t in QuestionType::ALL {
            let err = validate_answer(&candidate, &QuestionRules::new(t), false).unwrap_err();
            assert_matches!(err, CoreError::Validation(ref msg) if msg == ONLY_ONE_ANSWER_TYPE);
        }
    }

    #[test]
    fn all_three_populated_is_rejected() {
        let candidate = AnswerCandidate {
            text_answer: Some("x".into()),
            numeric_answer: Some(1.0),
            email_answer: Some("a@b.co".into()),
        };
        assert_eq!(candidate.populated_count(), 3);
        assert!(validate_answer(&candidate, &short_text(10), false).is_err());
    }

    #[test]
    fn empty_strings_do_not_count_as_populated() {
        let candidate = AnswerCandidate {
            text_answer: Some(String::new()),
            numeric_answer: Some(25.0),
            email_answer: Some(String::new()),
        };
        assert_eq!(candidate.populated_count(), 1);
        assert_eq!(
            validate_answer(&candidate, &number_between(10, 50), false).unwrap(),
            AnswerValue::Number(25.0)
        );
    }

    #[test]
    fn zero_counts_as_a_numeric_answer() {
        assert_eq!(numeric(0.0).populated_count(), 1);
        let q = QuestionRules::new(QuestionType::Number);
        assert_eq!(validate_answer(&numeric(0.0), &q, false).unwrap(), AnswerValue::Number(0.0));
    }

    // -- uniqueness ----------------------------------------------------------

    #[test]
    fn existing_answer_is_a_non_field_error() {
        let err = validate_answer(&text("Alice"), &short_text(100), true).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg == ANSWER_ALREADY_EXISTS);
    }

    #[test]
    fn exclusivity_is_checked_before_uniqueness() {
        let candidate = AnswerCandidate {
            text_answer: Some("x".into()),
            numeric_answer: Some(1.0),
            email_answer: None,
        };
        let err = validate_answer(&candidate, &short_text(100), true).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg) if msg == ONLY_ONE_ANSWER_TYPE);
    }

    #[test]
    fn uniqueness_is_checked_before_type_dispatch() {
        // Missing email would be a field error, but the duplicate wins.
        let q = QuestionRules::new(QuestionType::Email);
        let err = validate_answer(&AnswerCandidate::default(), &q, true).unwrap_err();
        assert_eq!(err.field_name(), None);
    }

    // -- text ----------------------------------------------------------------

    #[test]
    fn short_text_within_limit_is_accepted() {
        assert_eq!(
            validate_answer(&text("Alice"), &short_text(100), false).unwrap(),
            AnswerValue::Text("Alice".into())
        );
    }

    #[test]
    fn text_over_limit_is_rejected_on_text_answer() {
        let err = validate_answer(&text(&"a".repeat(101)), &short_text(100), false).unwrap_err();
        assert_eq!(err.field_name(), Some("text_answer"));
    }

    #[test]
    fn text_limit_counts_characters_not_bytes() {
        assert!(validate_answer(&text(&"é".repeat(5)), &short_text(5), false).is_ok());
    }

    #[test]
    fn text_without_max_length_uses_type_ceiling() {
        let q = QuestionRules::new(QuestionType::ShortText);
        assert!(validate_answer(&text(&"a".repeat(200)), &q, false).is_ok());
        assert!(validate_answer(&text(&"a".repeat(201)), &q, false).is_err());

        let q = QuestionRules::new(QuestionType::LongText);
        assert!(validate_answer(&text(&"a".repeat(5000)), &q, false).is_ok());
    }

    #[test]
    fn text_question_requires_text_answer() {
        let err = validate_answer(&numeric(3.0), &short_text(100), false).unwrap_err();
        assert_eq!(err.field_name(), Some("text_answer"));

        let err = validate_answer(&text(""), &short_text(100), false).unwrap_err();
        assert_eq!(err.field_name(), Some("text_answer"));
    }

    // -- number --------------------------------------------------------------

    #[test]
    fn number_in_range_is_accepted() {
        assert_eq!(
            validate_answer(&numeric(25.0), &number_between(10, 50), false).unwrap(),
            AnswerValue::Number(25.0)
        );
    }

    #[test]
    fn number_bounds_are_inclusive() {
        let q = number_between(10, 50);
        assert!(validate_answer(&numeric(10.0), &q, false).is_ok());
        assert!(validate_answer(&numeric(50.0), &q, false).is_ok());
    }

    #[test]
    fn number_below_min_is_rejected_on_numeric_answer() {
        let err = validate_answer(&numeric(5.0), &number_between(10, 50), false).unwrap_err();
        assert_matches!(
            err,
            CoreError::FieldValidation { field: "numeric_answer", ref message }
                if message.contains("greater than or equal to 10")
        );
    }

    #[test]
    fn number_above_max_is_rejected_on_numeric_answer() {
        let err = validate_answer(&numeric(51.0), &number_between(10, 50), false).unwrap_err();
        assert_eq!(err.field_name(), Some("numeric_answer"));
    }

    #[test]
    fn number_question_requires_numeric_answer() {
        let err = validate_answer(&text("25"), &number_between(10, 50), false).unwrap_err();
        assert_eq!(err.field_name(), Some("numeric_answer"));
    }

    #[test]
    fn fractional_answer_needs_allow_decimal() {
        let mut q = number_between(0, 10);
        let err = validate_answer(&numeric(2.5), &q, false).unwrap_err();
        assert_eq!(err.field_name(), Some("numeric_answer"));

        q.allow_decimal = true;
        assert_eq!(validate_answer(&numeric(2.5), &q, false).unwrap(), AnswerValue::Number(2.5));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let q = QuestionRules {
            allow_decimal: true,
            ..QuestionRules::new(QuestionType::Number)
        };
        assert!(validate_answer(&numeric(f64::NAN), &q, false).is_err());
        assert!(validate_answer(&numeric(f64::INFINITY), &q, false).is_err());
    }

    // -- email ---------------------------------------------------------------

    #[test]
    fn email_question_requires_email_answer() {
        let q = QuestionRules::new(QuestionType::Email);
        let err = validate_answer(&AnswerCandidate::default(), &q, false).unwrap_err();
        assert_eq!(err.field_name(), Some("email_answer"));
    }

    #[test]
    fn email_answer_is_accepted() {
        let q = QuestionRules::new(QuestionType::Email);
        assert_eq!(
            validate_answer(&email("alice@example.com"), &q, false).unwrap(),
            AnswerValue::Email("alice@example.com".into())
        );
    }

    // -- AnswerValue accessors -----------------------------------------------

    #[test]
    fn accessors_expose_only_the_populated_column() {
        let v = AnswerValue::Number(4.0);
        assert_eq!(v.numeric_answer(), Some(4.0));
        assert_eq!(v.text_answer(), None);
        assert_eq!(v.email_answer(), None);
    }
}
