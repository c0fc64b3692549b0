//! Question category model and DTOs.
//!
//! Categories are keyed by their code (`category_cd`) and own a list of
//! base questions.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use survey_core::types::Timestamp;
use validator::{Validate, ValidationErrors};

use crate::models::base_question::BaseQuestion;
use crate::models::{check_patch_length, MAX_DESCRIPTION_LEN};

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Category {
    pub category_cd: String,
    pub category_desc: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 20))]
    pub category_cd: String,
    #[validate(length(max = 255))]
    pub category_desc: Option<String>,
}

/// DTO for updating a category. The code cannot be changed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    #[serde(default, deserialize_with = "survey_core::patch::deserialize_some")]
    pub category_desc: Option<Option<String>>,
}

impl Validate for UpdateCategory {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_patch_length(&mut errors, "category_desc", &self.category_desc, MAX_DESCRIPTION_LEN);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A category with its base questions, ordered by `sort_order`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: Category,
    pub base_questions: Vec<BaseQuestion>,
}
