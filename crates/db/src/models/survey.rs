//! Survey entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use survey_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::program::Program;
use crate::models::survey_type::SurveyType;

/// A survey row from the `surveys` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Survey {
    pub id: DbId,
    pub title: String,
    pub survey_type_cd: String,
    pub program_id: Option<DbId>,
    pub cal_year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new survey.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSurvey {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(length(min = 1, max = 20))]
    pub survey_type_cd: String,
    pub program_id: Option<DbId>,
    #[validate(range(min = 1900, max = 2999))]
    pub cal_year: i32,
}

/// DTO for updating an existing survey. All fields are optional; sending
/// `"program_id": null` detaches the survey from its program.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSurvey {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub survey_type_cd: Option<String>,
    #[serde(default, deserialize_with = "survey_core::patch::deserialize_some")]
    pub program_id: Option<Option<DbId>>,
    #[validate(range(min = 1900, max = 2999))]
    pub cal_year: Option<i32>,
}

/// A survey with its survey type and program resolved.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyDetail {
    #[serde(flatten)]
    pub survey: Survey,
    pub survey_type: SurveyType,
    pub program: Option<Program>,
}
