//! Route definitions for the `/answers` resource.
//!
//! Answers have no update route; once stored they are immutable.

use axum::routing::get;
use axum::Router;

use crate::handlers::answer;
use crate::state::AppState;

/// Routes mounted at `/answers`.
///
/// ```text
/// GET    /        -> list (?question_id=)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(answer::list).post(answer::create))
        .route("/{id}", get(answer::get_by_id).delete(answer::delete))
}
