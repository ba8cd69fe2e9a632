//! Repository for the `questions` table.

use forms_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{CreateQuestion, Question};

const COLUMNS: &str = "id, form_id, text, required, question_type, \
                       max_length, min_value, max_value, allow_decimal";

/// Provides CRUD operations for questions.
///
/// Callers are expected to pass records that have already been through
/// `forms_core::validation::validate_question`.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a question under `form_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        form_id: DbId,
        input: &CreateQuestion,
    ) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions
                (form_id, text, required, question_type, max_length, min_value, max_value, allow_decimal)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(form_id)
            .bind(&input.text)
            .bind(input.required)
            .bind(input.question_type.as_str())
            .bind(input.max_length)
            .bind(input.min_value)
            .bind(input.max_value)
            .bind(input.allow_decimal)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all questions in insertion order.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Question>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List the questions of one form in insertion order.
    pub async fn list_by_form(pool: &PgPool, form_id: DbId) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE form_id = $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(form_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every column of an existing question.
    ///
    /// Unlike a `COALESCE` patch this can clear optional constraints, which
    /// normalization does when the question type changes. Returns `None` if
    /// no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        form_id: DbId,
        input: &CreateQuestion,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions SET
                form_id = $2,
                text = $3,
                required = $4,
                question_type = $5,
                max_length = $6,
                min_value = $7,
                max_value = $8,
                allow_decimal = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(form_id)
            .bind(&input.text)
            .bind(input.required)
            .bind(input.question_type.as_str())
            .bind(input.max_length)
            .bind(input.min_value)
            .bind(input.max_value)
            .bind(input.allow_decimal)
            .fetch_optional(pool)
            .await
    }

    /// Delete a question and its answer. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
