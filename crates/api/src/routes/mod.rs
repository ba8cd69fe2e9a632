pub mod answer;
pub mod form;
pub mod health;
pub mod question;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /forms                          list, create
/// /forms/{id}                     get, update, delete
/// /forms/{id}/questions           list, create (scoped to the form)
///
/// /questions                      list, create
/// /questions/{id}                 get, update, delete
///
/// /answers                        list (?question_id=), create
/// /answers/{id}                   get, delete
/// ```
///
/// Every collection endpoint also answers with a trailing slash
/// (`/forms/`, `/forms/{id}/questions/`, `/questions/`, `/answers/`).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/forms", form::router())
        .nest("/questions", question::router())
        .nest("/answers", answer::router())
        .merge(slash_terminated_collections())
}

fn slash_terminated_collections() -> Router<AppState> {
    use crate::handlers::{answer, form, question};

    Router::new()
        .route("/forms/", get(form::list).post(form::create))
        .route(
            "/forms/{id}/questions/",
            get(form::list_questions).post(question::create_for_form),
        )
        .route("/questions/", get(question::list).post(question::create))
        .route("/answers/", get(answer::list).post(answer::create))
}
