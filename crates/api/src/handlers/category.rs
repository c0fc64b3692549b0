//! Handlers for the `/categories` resource, addressed by code.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use survey_core::error::CoreError;
use survey_db::crud::Changes;
use survey_db::models::category::{Category, CategoryDetail, CreateCategory, UpdateCategory};
use survey_db::repositories::CategoryRepo;

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

fn not_found(code: &str) -> AppError {
    AppError::Core(CoreError::not_found("Category", code))
}

/// GET /api/v1/categories
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::get_all(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(categories))
}

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    validate_input(&input)?;
    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/categories/{code}
///
/// Returns the category with its base questions.
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<CategoryDetail>> {
    let detail = CategoryRepo::get_detail(&state.pool, &code)
        .await?
        .ok_or_else(|| not_found(&code))?;
    Ok(Json(detail))
}

/// PATCH /api/v1/categories/{code}
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    validate_input(&input)?;
    let existing = CategoryRepo::get(&state.pool, code.clone())
        .await?
        .ok_or_else(|| not_found(&code))?;
    let category = CategoryRepo::update(&state.pool, &existing, input.changeset()).await?;
    Ok(Json(category))
}

/// DELETE /api/v1/categories/{code}
///
/// Base questions of the category are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::delete(&state.pool, code.clone())
        .await?
        .ok_or_else(|| not_found(&code))?;
    Ok(Json(category))
}
