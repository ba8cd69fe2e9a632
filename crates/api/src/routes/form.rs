//! Route definitions for the `/forms` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{form, question};
use crate::state::AppState;

/// Routes mounted at `/forms`.
///
/// ```text
/// GET    /                   -> list
/// POST   /                   -> create
/// GET    /{id}               -> get_by_id
/// PUT    /{id}               -> update
/// DELETE /{id}               -> delete
/// GET    /{id}/questions     -> list_questions
/// POST   /{id}/questions     -> question::create_for_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(form::list).post(form::create))
        .route(
            "/{id}",
            get(form::get_by_id).put(form::update).delete(form::delete),
        )
        .route(
            "/{id}/questions",
            get(form::list_questions).post(question::create_for_form),
        )
}
