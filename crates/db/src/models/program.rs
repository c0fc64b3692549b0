//! Program entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use survey_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::survey::Survey;

/// A program row from the `programs` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Program {
    pub id: DbId,
    pub program_name: String,
    pub program_code: String,
    pub cal_year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new program.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProgram {
    #[validate(length(min = 1, max = 255))]
    pub program_name: String,
    #[validate(length(min = 1, max = 50))]
    pub program_code: String,
    #[validate(range(min = 1900, max = 2999))]
    pub cal_year: i32,
}

/// DTO for updating an existing program. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProgram {
    #[validate(length(min = 1, max = 255))]
    pub program_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub program_code: Option<String>,
    #[validate(range(min = 1900, max = 2999))]
    pub cal_year: Option<i32>,
}

/// A program together with every survey that belongs to it.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramDetail {
    #[serde(flatten)]
    pub program: Program,
    pub surveys: Vec<Survey>,
}
