//! Explicit field presence for inserts and partial updates.
//!
//! A [`Changeset`] records exactly which columns a caller supplied and what
//! to write into them. Columns that never made it into the set are not
//! touched: `INSERT` leaves them to their storage default, `UPDATE` leaves
//! them as they are.

use serde_json::{Map, Value};
use sqlx::{Postgres, QueryBuilder};
use survey_core::error::CoreError;

/// Column types that entities expose for writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Int,
    BigInt,
}

/// Descriptor for one writable column of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub nullable: bool,
}

impl Field {
    /// A `NOT NULL` column.
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
        }
    }

    /// A column that accepts `NULL`.
    pub const fn nullable(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            nullable: true,
        }
    }

    /// Convert an untyped JSON value into a value for this column.
    fn value_from_json(&self, value: &Value) -> Result<FieldValue, CoreError> {
        let name = self.name;
        if value.is_null() {
            if !self.nullable {
                return Err(CoreError::Validation(format!("{name}: may not be null")));
            }
            return Ok(match self.kind {
                FieldKind::Text => FieldValue::Text(None),
                FieldKind::Int => FieldValue::Int(None),
                FieldKind::BigInt => FieldValue::BigInt(None),
            });
        }

        match self.kind {
            FieldKind::Text => value
                .as_str()
                .map(|s| FieldValue::Text(Some(s.to_string())))
                .ok_or_else(|| CoreError::Validation(format!("{name}: expected a string"))),
            FieldKind::Int => value
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(|v| FieldValue::Int(Some(v)))
                .ok_or_else(|| {
                    CoreError::Validation(format!("{name}: expected a 32-bit integer"))
                }),
            FieldKind::BigInt => value
                .as_i64()
                .map(|v| FieldValue::BigInt(Some(v)))
                .ok_or_else(|| CoreError::Validation(format!("{name}: expected an integer"))),
        }
    }
}

/// A single value bound into an `INSERT` or `UPDATE`. `None` writes `NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(Option<String>),
    Int(Option<i32>),
    BigInt(Option<i64>),
}

impl FieldValue {
    fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            FieldValue::Text(v) => builder.push_bind(v),
            FieldValue::Int(v) => builder.push_bind(v),
            FieldValue::BigInt(v) => builder.push_bind(v),
        };
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(Some(v))
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(Some(v.to_string()))
    }
}

impl From<Option<String>> for FieldValue {
    fn from(v: Option<String>) -> Self {
        FieldValue::Text(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(Some(v))
    }
}

impl From<Option<i32>> for FieldValue {
    fn from(v: Option<i32>) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::BigInt(Some(v))
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(v: Option<i64>) -> Self {
        FieldValue::BigInt(v)
    }
}

/// Something that knows which columns it wants written.
///
/// Implemented by every create and update DTO.
pub trait Changes {
    fn changeset(&self) -> Changeset;
}

/// Ordered set of `(column, value)` pairs. Setting a column twice keeps
/// the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changeset {
    fields: Vec<(&'static str, FieldValue)>,
}

impl Changeset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `column` as present with `value`.
    pub fn set(mut self, column: &'static str, value: impl Into<FieldValue>) -> Self {
        self.insert(column, value.into());
        self
    }

    /// Mark `column` as present only when `value` is `Some`.
    ///
    /// For nullable columns pass an `Option<Option<T>>`: `Some(None)` is
    /// present and writes `NULL`.
    pub fn set_opt<T: Into<FieldValue>>(self, column: &'static str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    fn insert(&mut self, column: &'static str, value: FieldValue) {
        match self.fields.iter_mut().find(|(c, _)| *c == column) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Remove `column`, returning its value if it was present.
    pub fn remove(&mut self, column: &str) -> Option<FieldValue> {
        let pos = self.fields.iter().position(|(c, _)| *c == column)?;
        Some(self.fields.remove(pos).1)
    }

    /// Drop every column that is not one of `fields`.
    pub fn retain_fields(&mut self, fields: &[Field]) {
        self.fields
            .retain(|(c, _)| fields.iter().any(|f| f.name == *c));
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v)
    }

    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(c, _)| *c)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a changeset from an untyped JSON object.
    ///
    /// Keys that do not name one of `fields` are ignored. A value of the
    /// wrong type, or `null` for a required column, is a validation error.
    pub fn from_json(map: &Map<String, Value>, fields: &[Field]) -> Result<Self, CoreError> {
        let mut changes = Changeset::new();
        for field in fields {
            if let Some(value) = map.get(field.name) {
                changes.insert(field.name, field.value_from_json(value)?);
            }
        }
        Ok(changes)
    }

    /// `INSERT INTO table (cols..) VALUES (binds..) RETURNING returning`.
    pub(crate) fn into_insert(self, table: &str, returning: &str) -> QueryBuilder<'static, Postgres> {
        if self.fields.is_empty() {
            return QueryBuilder::new(format!(
                "INSERT INTO {table} DEFAULT VALUES RETURNING {returning}"
            ));
        }

        let columns: Vec<&str> = self.columns().collect();
        let mut builder =
            QueryBuilder::new(format!("INSERT INTO {table} ({}) VALUES (", columns.join(", ")));
        let mut separated = false;
        for (_, value) in self.fields {
            if separated {
                builder.push(", ");
            }
            value.push_bind(&mut builder);
            separated = true;
        }
        builder.push(format!(") RETURNING {returning}"));
        builder
    }

    /// `UPDATE table SET col = bind, .. WHERE key_column = ` with the key
    /// bind left to the caller, followed by `RETURNING`.
    ///
    /// Callers must not pass an empty changeset.
    pub(crate) fn into_update(
        self,
        table: &str,
        key_column: &str,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(format!("UPDATE {table} SET "));
        let mut separated = false;
        for (column, value) in self.fields {
            if separated {
                builder.push(", ");
            }
            builder.push(column).push(" = ");
            value.push_bind(&mut builder);
            separated = true;
        }
        builder.push(format!(" WHERE {key_column} = "));
        builder
    }
}
