//! HTTP handlers, one module per resource.
//!
//! Handlers validate input, call the matching repository, and turn an
//! absent row into a 404. Storage errors propagate through [`AppError`].

pub mod base_question;
pub mod category;
pub mod program;
pub mod survey;
pub mod survey_type;

use survey_core::error::CoreError;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Run `validator` rules on a request DTO, mapping failures to a 400.
fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|errors| AppError::Core(CoreError::from(errors)))
}
