//! Survey type lookup model and DTOs.
//!
//! Survey types are keyed by a short client-chosen code (`survey_type_cd`)
//! rather than a generated id.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use survey_core::types::Timestamp;
use validator::{Validate, ValidationErrors};

use crate::models::survey::Survey;
use crate::models::{check_patch_length, MAX_DESCRIPTION_LEN};

/// A row from the `survey_types` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SurveyType {
    pub survey_type_cd: String,
    pub survey_type_desc: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a survey type.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSurveyType {
    #[validate(length(min = 1, max = 20))]
    pub survey_type_cd: String,
    #[validate(length(max = 255))]
    pub survey_type_desc: Option<String>,
}

/// DTO for updating a survey type. The code is the primary key and cannot
/// be changed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSurveyType {
    #[serde(default, deserialize_with = "survey_core::patch::deserialize_some")]
    pub survey_type_desc: Option<Option<String>>,
}

impl Validate for UpdateSurveyType {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_patch_length(
            &mut errors,
            "survey_type_desc",
            &self.survey_type_desc,
            MAX_DESCRIPTION_LEN,
        );
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A survey type together with the surveys that use it.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyTypeDetail {
    #[serde(flatten)]
    pub survey_type: SurveyType,
    pub surveys: Vec<Survey>,
}
