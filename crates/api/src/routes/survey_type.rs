//! Route definitions for the `/survey_types` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::survey_type;
use crate::state::AppState;

/// Routes mounted at `/survey_types`.
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
        .route("/", get(survey_type::list).post(survey_type::create))
        .route(
            "/{code}",
            get(survey_type::get_by_code)
                .patch(survey_type::update)
                .delete(survey_type::delete),
        )
}
