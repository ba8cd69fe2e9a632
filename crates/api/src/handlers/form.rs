//! Handlers for the `/forms` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use forms_core::types::DbId;
use forms_db::models::form::{CreateForm, Form, UpdateForm};
use forms_db::models::question::Question;
use forms_db::repositories::{FormRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidJson;
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/forms
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateForm>,
) -> AppResult<(StatusCode, Json<Form>)> {
    let form = FormRepo::create(&state.pool, &input).await?;
    tracing::info!(form_id = form.id, "Form created");
    Ok((StatusCode::CREATED, Json(form)))
}

/// GET /api/v1/forms
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Form>>> {
    let (limit, offset) = params.resolve();
    let forms = FormRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(forms))
}

/// GET /api/v1/forms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Form>> {
    let form = FormRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Form", id))?;
    Ok(Json(form))
}

/// PUT /api/v1/forms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidJson(input): ValidJson<UpdateForm>,
) -> AppResult<Json<Form>> {
    let form = FormRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Form", id))?;
    Ok(Json(form))
}

/// DELETE /api/v1/forms/{id}
///
/// Removes the form's questions and answers with it.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if FormRepo::delete(&state.pool, id).await? {
        tracing::info!(form_id = id, "Form deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Form", id))
    }
}

/// GET /api/v1/forms/{id}/questions
pub async fn list_questions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Question>>> {
    if !FormRepo::exists(&state.pool, id).await? {
        return Err(AppError::not_found("Form", id));
    }
    let questions = QuestionRepo::list_by_form(&state.pool, id).await?;
    Ok(Json(questions))
}
