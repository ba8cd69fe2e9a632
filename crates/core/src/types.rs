//! Identifier and time types shared by forms, questions and answers.

/// Row id of a form, question or answer (`BIGSERIAL` in the entity store).
pub type DbId = i64;

/// Creation time of a form or answer, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
