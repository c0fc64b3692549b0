//! Route definitions for the `/surveys` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::survey;
use crate::state::AppState;

/// Routes mounted at `/surveys`.
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
        .route("/", get(survey::list).post(survey::create))
        .route(
            "/{id}",
            get(survey::get_by_id)
                .patch(survey::update)
                .delete(survey::delete),
        )
}
