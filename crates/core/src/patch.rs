//! Field presence for partial updates.
//!
//! Update DTOs model every column as `Option<T>`: `None` means the field was
//! absent from the payload and must be left alone. Nullable columns need one
//! more level, `Option<Option<T>>`, so that an explicit JSON `null` (clear the
//! column) can be told apart from a missing key.
//!
//! Serde collapses both cases to `None` by default; annotate such fields with
//!
//! ```ignore
//! #[serde(default, deserialize_with = "survey_core::patch::deserialize_some")]
//! pub program_id: Option<Option<DbId>>,
//! ```

use serde::{Deserialize, Deserializer};

/// Deserialize any present value (including `null`) as `Some(value)`.
///
/// Combined with `#[serde(default)]`, a missing key stays `None`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
