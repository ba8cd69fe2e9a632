//! Handlers for the `/answers` resource.
//!
//! Answers are created once and never updated. Creation resolves the
//! question, checks for an existing answer, then hands both to
//! [`validate_answer`]. The existence check and the insert are separate
//! statements; the `uq_answers_question_id` index turns a lost race into a
//! [`CoreError::Conflict`] (409) instead of a second row.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use forms_core::error::CoreError;
use forms_core::types::DbId;
use forms_core::validation::{validate_answer, ANSWER_ALREADY_EXISTS};
use forms_db::models::answer::{Answer, CreateAnswer};
use forms_db::repositories::{AnswerRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::query::AnswerListParams;
use crate::state::AppState;

/// POST /api/v1/answers
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateAnswer>,
) -> AppResult<(StatusCode, Json<Answer>)> {
    let question = QuestionRepo::find_by_id(&state.pool, input.question_id)
        .await?
        .ok_or(AppError::not_found("Question", input.question_id))?;

    let exists = AnswerRepo::exists_for_question(&state.pool, question.id).await?;

    let value = validate_answer(&input.candidate(), &question.rules(), exists).inspect_err(|e| {
        tracing::debug!(question_id = question.id, error = %e, "Answer rejected");
    })?;

    let answer = AnswerRepo::create(&state.pool, question.id, &value)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                tracing::debug!(question_id = question.id, "Concurrent answer won the insert");
                AppError::Core(CoreError::Conflict(ANSWER_ALREADY_EXISTS.to_string()))
            }
            other => AppError::Database(other),
        })?;
    tracing::info!(answer_id = answer.id, question_id = question.id, "Answer created");
    Ok((StatusCode::CREATED, Json(answer)))
}

/// GET /api/v1/answers
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AnswerListParams>,
) -> AppResult<Json<Vec<Answer>>> {
    let (limit, offset) = params.pagination().resolve();
    let answers = AnswerRepo::list(&state.pool, params.question_id, limit, offset).await?;
    Ok(Json(answers))
}

/// GET /api/v1/answers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Answer>> {
    let answer = AnswerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Answer", id))?;
    Ok(Json(answer))
}

/// DELETE /api/v1/answers/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if AnswerRepo::delete(&state.pool, id).await? {
        tracing::info!(answer_id = id, "Answer deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Answer", id))
    }
}
