//! Validation engine for questions and answers.
//!
//! Both entry points are pure functions: they take a candidate record (and,
//! for answers, the owning question's rules plus whether an answer already
//! exists) and return either the normalized record to persist or the first
//! [`CoreError`](crate::error::CoreError) that rejected it. Every write path
//! in the API goes through these functions.

pub mod answer;
pub mod question;

pub use answer::{validate_answer, AnswerCandidate, AnswerValue, ANSWER_ALREADY_EXISTS};
pub use question::{validate_question, QuestionRules};
