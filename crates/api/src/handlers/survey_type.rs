//! Handlers for the `/survey_types` resource, addressed by code.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use survey_core::error::CoreError;
use survey_db::crud::Changes;
use survey_db::models::survey_type::{
    CreateSurveyType, SurveyType, SurveyTypeDetail, UpdateSurveyType,
};
use survey_db::repositories::SurveyTypeRepo;

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

fn not_found(code: &str) -> AppError {
    AppError::Core(CoreError::not_found("SurveyType", code))
}

/// GET /api/v1/survey_types
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<SurveyType>>> {
    let types = SurveyTypeRepo::get_all(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(types))
}

/// POST /api/v1/survey_types
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSurveyType>,
) -> AppResult<(StatusCode, Json<SurveyType>)> {
    validate_input(&input)?;
    let survey_type = SurveyTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(survey_type)))
}

/// GET /api/v1/survey_types/{code}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<SurveyTypeDetail>> {
    let detail = SurveyTypeRepo::get_detail(&state.pool, &code)
        .await?
        .ok_or_else(|| not_found(&code))?;
    Ok(Json(detail))
}

/// PATCH /api/v1/survey_types/{code}
///
/// The code itself is immutable; a `survey_type_cd` key in the body is ignored.
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(input): Json<UpdateSurveyType>,
) -> AppResult<Json<SurveyType>> {
    validate_input(&input)?;
    let existing = SurveyTypeRepo::get(&state.pool, code.clone())
        .await?
        .ok_or_else(|| not_found(&code))?;
    let survey_type = SurveyTypeRepo::update(&state.pool, &existing, input.changeset()).await?;
    Ok(Json(survey_type))
}

/// DELETE /api/v1/survey_types/{code}
///
/// Refused with 409 while any survey still uses the type.
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<SurveyType>> {
    let survey_type = SurveyTypeRepo::delete(&state.pool, code.clone())
        .await?
        .ok_or_else(|| not_found(&code))?;
    Ok(Json(survey_type))
}
