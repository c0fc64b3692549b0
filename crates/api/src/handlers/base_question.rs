//! Handlers for the `/base_questions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use survey_core::error::CoreError;
use survey_core::types::DbId;
use survey_db::crud::Changes;
use survey_db::models::base_question::{BaseQuestion, CreateBaseQuestion, UpdateBaseQuestion};
use survey_db::repositories::BaseQuestionRepo;

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found("BaseQuestion", id))
}

/// GET /api/v1/base_questions
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<BaseQuestion>>> {
    let questions = BaseQuestionRepo::get_all(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(questions))
}

/// POST /api/v1/base_questions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBaseQuestion>,
) -> AppResult<(StatusCode, Json<BaseQuestion>)> {
    validate_input(&input)?;
    let question = BaseQuestionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

/// GET /api/v1/base_questions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BaseQuestion>> {
    let question = BaseQuestionRepo::get(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(question))
}

/// PATCH /api/v1/base_questions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBaseQuestion>,
) -> AppResult<Json<BaseQuestion>> {
    validate_input(&input)?;
    let existing = BaseQuestionRepo::get(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let question = BaseQuestionRepo::update(&state.pool, &existing, input.changeset()).await?;
    Ok(Json(question))
}

/// DELETE /api/v1/base_questions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BaseQuestion>> {
    let question = BaseQuestionRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(question))
}
