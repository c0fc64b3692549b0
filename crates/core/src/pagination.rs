//! Offset/limit pagination helpers.
//!
//! List endpoints accept `?skip=&limit=`. Values are clamped here so the
//! repository layer can bind them straight into `OFFSET` / `LIMIT`.

/// Number of rows skipped when the caller does not say otherwise.
pub const DEFAULT_SKIP: i64 = 0;

/// Page size used when the caller does not say otherwise.
pub const DEFAULT_LIMIT: i64 = 100;

/// Hard ceiling on a single page.
pub const MAX_PAGE_LIMIT: i64 = 1000;

/// Clamp a user-provided offset to non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(DEFAULT_SKIP).max(0)
}

/// Clamp a user-provided limit into `0..=MAX_PAGE_LIMIT`.
///
/// A limit of zero is honoured and yields an empty page.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_PAGE_LIMIT)
}
