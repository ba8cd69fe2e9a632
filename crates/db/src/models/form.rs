//! Form entity model and DTOs.

use forms_core::question::FORM_TITLE_MAX_LENGTH;
use forms_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `forms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Form {
    pub id: DbId,
    pub title: String,
    /// Set by the database on insert and never written again.
    pub created_at: Timestamp,
}

/// DTO for creating a new form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateForm {
    #[validate(length(
        min = 1,
        max = FORM_TITLE_MAX_LENGTH,
        message = "Title must be between 1 and 100 characters."
    ))]
    pub title: String,
}

/// DTO for renaming a form. `created_at` is not updatable.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateForm {
    #[validate(length(
        min = 1,
        max = FORM_TITLE_MAX_LENGTH,
        message = "Title must be between 1 and 100 characters."
    ))]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(len: usize) -> CreateForm {
        CreateForm {
            title: "t".repeat(len),
        }
    }

    #[test]
    fn title_at_limit_passes() {
        assert!(titled(FORM_TITLE_MAX_LENGTH as usize).validate().is_ok());
    }

    #[test]
    fn title_over_limit_or_empty_fails_on_title() {
        for len in [0, FORM_TITLE_MAX_LENGTH as usize + 1] {
            let errors = titled(len).validate().unwrap_err();
            assert!(errors.field_errors().contains_key("title"));
        }
    }

    #[test]
    fn rename_uses_the_same_limit() {
        let input = UpdateForm {
            title: Some("t".repeat(FORM_TITLE_MAX_LENGTH as usize + 1)),
        };
        assert!(input.validate().is_err());
        assert!(UpdateForm { title: None }.validate().is_ok());
    }
}
