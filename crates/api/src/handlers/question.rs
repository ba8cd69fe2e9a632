//! Handlers for the `/questions` resource.
//!
//! Every write runs the candidate through
//! [`validate_question`](forms_core::validation::validate_question) and
//! stores the normalized result.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use forms_core::error::CoreError;
use forms_core::types::DbId;
use forms_core::validation::validate_question;
use forms_db::models::question::{CreateQuestion, Question, UpdateQuestion};
use forms_db::repositories::{FormRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/questions
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateQuestion>,
) -> AppResult<(StatusCode, Json<Question>)> {
    let question = insert(&state, input).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

/// POST /api/v1/forms/{id}/questions
///
/// The form in the URL path overrides any `form_id` in the body.
pub async fn create_for_form(
    State(state): State<AppState>,
    Path(form_id): Path<DbId>,
    ValidJson(mut input): ValidJson<CreateQuestion>,
) -> AppResult<(StatusCode, Json<Question>)> {
    input.form_id = Some(form_id);
    let question = insert(&state, input).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

async fn insert(state: &AppState, input: CreateQuestion) -> AppResult<Question> {
    let form_id = input
        .form_id
        .ok_or_else(|| CoreError::field("form_id", "This field is required."))?;

    let rules = validate_question(&input.rules()).inspect_err(|e| {
        tracing::debug!(form_id, error = %e, "Question rejected");
    })?;

    if !FormRepo::exists(&state.pool, form_id).await? {
        return Err(AppError::not_found("Form", form_id));
    }

    let question = QuestionRepo::create(&state.pool, form_id, &input.with_rules(rules)).await?;
    tracing::info!(
        question_id = question.id,
        form_id,
        question_type = %question.question_type,
        "Question created"
    );
    Ok(question)
}

/// GET /api/v1/questions
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Question>>> {
    let (limit, offset) = params.resolve();
    let questions = QuestionRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(questions))
}

/// GET /api/v1/questions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Question>> {
    let question = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Question", id))?;
    Ok(Json(question))
}

/// PUT /api/v1/questions/{id}
///
/// Fields omitted from the body keep their stored values; the merged
/// record is revalidated as a whole before it is written.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(patch): ValidJson<UpdateQuestion>,
) -> AppResult<Json<Question>> {
    let existing = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Question", id))?;

    let merged = existing.merged_with(&patch);
    let form_id = merged.form_id.unwrap_or(existing.form_id);

    let rules = validate_question(&merged.rules()).inspect_err(|e| {
        tracing::debug!(question_id = id, error = %e, "Question update rejected");
    })?;

    if form_id != existing.form_id && !FormRepo::exists(&state.pool, form_id).await? {
        return Err(AppError::not_found("Form", form_id));
    }

    let question = QuestionRepo::replace(&state.pool, id, form_id, &merged.with_rules(rules))
        .await?
        .ok_or(AppError::not_found("Question", id))?;
    tracing::info!(question_id = id, "Question updated");
    Ok(Json(question))
}

/// DELETE /api/v1/questions/{id}
///
/// Removes the question's answer with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if QuestionRepo::delete(&state.pool, id).await? {
        tracing::info!(question_id = id, "Question deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Question", id))
    }
}
