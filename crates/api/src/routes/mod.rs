pub mod base_question;
pub mod category;
pub mod health;
pub mod program;
pub mod survey;
pub mod survey_type;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /programs                       list, create
/// /programs/{id}                  detail (with surveys), patch, delete
///
/// /surveys                        list, create
/// /surveys/{id}                   detail (with type and program), patch, delete
///
/// /survey_types                   list, create
/// /survey_types/{code}            detail (with surveys), patch, delete
///
/// /categories                     list, create
/// /categories/{code}              detail (with base questions), patch, delete
///
/// /base_questions                 list, create
/// /base_questions/{id}            get, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/programs", program::router())
        .nest("/surveys", survey::router())
        .nest("/survey_types", survey_type::router())
        .nest("/categories", category::router())
        .nest("/base_questions", base_question::router())
}
