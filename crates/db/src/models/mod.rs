//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//! - Where the entity has a detail view, a struct bundling its relations

pub mod base_question;
pub mod category;
pub mod program;
pub mod survey;
pub mod survey_type;

use validator::{ValidationError, ValidationErrors};

/// Upper bound, in characters, on free-text descriptions of lookup rows.
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Length check for a nullable patch field: only `Some(Some(text))` is
/// checked, since an absent key or an explicit `null` has nothing to measure.
///
/// Derived `length` rules do not reach through `Option<Option<String>>`.
pub(crate) fn check_patch_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &Option<Option<String>>,
    max: usize,
) {
    if let Some(Some(text)) = value {
        if text.chars().count() > max {
            errors.add(field, ValidationError::new("length"));
        }
    }
}
