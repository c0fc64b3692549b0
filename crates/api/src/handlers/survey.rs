//! Handlers for the `/surveys` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use survey_core::error::CoreError;
use survey_core::types::DbId;
use survey_db::crud::Changes;
use survey_db::models::survey::{CreateSurvey, Survey, SurveyDetail, UpdateSurvey};
use survey_db::repositories::SurveyRepo;

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found("Survey", id))
}

/// GET /api/v1/surveys
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Survey>>> {
    let surveys = SurveyRepo::get_all(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(surveys))
}

/// POST /api/v1/surveys
///
/// An unknown `survey_type_cd` or `program_id` is rejected by the foreign
/// keys and surfaces as 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSurvey>,
) -> AppResult<(StatusCode, Json<Survey>)> {
    validate_input(&input)?;
    let survey = SurveyRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(survey)))
}

/// GET /api/v1/surveys/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SurveyDetail>> {
    let detail = SurveyRepo::get_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(detail))
}

/// PATCH /api/v1/surveys/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSurvey>,
) -> AppResult<Json<Survey>> {
    validate_input(&input)?;
    let existing = SurveyRepo::get(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let survey = SurveyRepo::update(&state.pool, &existing, input.changeset()).await?;
    Ok(Json(survey))
}

/// DELETE /api/v1/surveys/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Survey>> {
    let survey = SurveyRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(survey))
}
