//! Base question model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use survey_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `base_questions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct BaseQuestion {
    pub id: DbId,
    pub category_cd: String,
    pub question_text: String,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a base question.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBaseQuestion {
    #[validate(length(min = 1, max = 20))]
    pub category_cd: String,
    #[validate(length(min = 1, max = 2000))]
    pub question_text: String,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

/// DTO for updating a base question. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBaseQuestion {
    #[validate(length(min = 1, max = 20))]
    pub category_cd: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    pub question_text: Option<String>,
    pub sort_order: Option<i32>,
}
