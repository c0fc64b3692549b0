//! Shared query parameter types for API handlers.

use serde::Deserialize;
use survey_core::pagination::{clamp_limit, clamp_skip};

/// Offset pagination parameters (`?skip=&limit=`), defaulting to 0 / 100.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn skip(&self) -> i64 {
        clamp_skip(self.skip)
    }

    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit)
    }
}
