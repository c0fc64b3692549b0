//! Route definitions for the `/base_questions` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::base_question;
use crate::state::AppState;

/// Routes mounted at `/base_questions`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PATCH  /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(base_question::list).post(base_question::create))
        .route(
            "/{id}",
            get(base_question::get_by_id)
                .patch(base_question::update)
                .delete(base_question::delete),
        )
}
