//! Repository for the `answers` table.

use forms_core::types::DbId;
use forms_core::validation::AnswerValue;
use sqlx::PgPool;

use crate::models::answer::Answer;

const COLUMNS: &str = "id, question_id, text_answer, numeric_answer, email_answer, created_at";

/// Provides create/read/delete operations for answers. There is no update:
/// an answer is immutable once stored.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Store an accepted answer for `question_id`.
    ///
    /// Fails with a unique violation on `uq_answers_question_id` if another
    /// answer for the same question was committed after the caller's
    /// existence check.
    pub async fn create(
        pool: &PgPool,
        question_id: DbId,
        value: &AnswerValue,
    ) -> Result<Answer, sqlx::Error> {
        let query = format!(
            "INSERT INTO answers (question_id, text_answer, numeric_answer, email_answer)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .bind(value.text_answer())
            .bind(value.numeric_answer())
            .bind(value.email_answer())
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether an answer has already been stored for `question_id`.
    pub async fn exists_for_question(pool: &PgPool, question_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM answers WHERE question_id = $1)",
        )
        .bind(question_id)
        .fetch_one(pool)
        .await
    }

    /// List answers, optionally restricted to one question.
    pub async fn list(
        pool: &PgPool,
        question_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM answers
             WHERE ($1::BIGINT IS NULL OR question_id = $1)
             ORDER BY id
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete an answer. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
