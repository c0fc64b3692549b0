//! Handlers for the `/programs` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use survey_core::error::CoreError;
use survey_core::types::DbId;
use survey_db::crud::Changes;
use survey_db::models::program::{CreateProgram, Program, ProgramDetail, UpdateProgram};
use survey_db::repositories::ProgramRepo;

use super::validate_input;
use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::not_found("Program", id))
}

/// GET /api/v1/programs
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Program>>> {
    let programs = ProgramRepo::get_all(&state.pool, params.skip(), params.limit()).await?;
    Ok(Json(programs))
}

/// POST /api/v1/programs
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProgram>,
) -> AppResult<(StatusCode, Json<Program>)> {
    validate_input(&input)?;
    let program = ProgramRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(program)))
}

/// GET /api/v1/programs/{id}
///
/// Returns the program with its surveys.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProgramDetail>> {
    let detail = ProgramRepo::get_detail(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(detail))
}

/// PATCH /api/v1/programs/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProgram>,
) -> AppResult<Json<Program>> {
    validate_input(&input)?;
    let existing = ProgramRepo::get(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let program = ProgramRepo::update(&state.pool, &existing, input.changeset()).await?;
    Ok(Json(program))
}

/// DELETE /api/v1/programs/{id}
///
/// Surveys of the program survive with their `program_id` cleared.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Program>> {
    let program = ProgramRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(program))
}
