use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A rejection tied to one input field.
    #[error("Invalid {field}: {message}")]
    FieldValidation {
        field: &'static str,
        message: String,
    },

    /// A rejection from a cross-field or object-level rule.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The write lost to a concurrent one that claimed the same slot.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    /// Shorthand for building a [`CoreError::FieldValidation`].
    pub fn field(field: &'static str, message: impl Into<String>) -> Self {
        CoreError::FieldValidation {
            field,
            message: message.into(),
        }
    }

    /// The input field this error is attributed to, if any.
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            CoreError::FieldValidation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
