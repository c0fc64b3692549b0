//! Route definitions for the `/categories` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{code}        -> get_by_code
/// PATCH  /{code}        -> update
/// DELETE /{code}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(category::list).post(category::create))
        .route(
            "/{code}",
            get(category::get_by_code)
                .patch(category::update)
                .delete(category::delete),
        )
}
