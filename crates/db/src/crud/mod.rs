//! Generic CRUD over any table described by an [`Entity`].
//!
//! [`CrudRepo<E>`] is a zero-sized repository with the five primitive
//! operations (`get`, `get_all`, `create`, `update`, `delete`). Entities
//! that need a detail view add inherent methods on their own instantiation,
//! e.g. `impl CrudRepo<Program> { pub async fn get_detail(..) }`.
//!
//! Every mutation runs in its own transaction and is committed before the
//! call returns. Storage errors are handed back untouched.

mod changeset;

use std::fmt::Display;
use std::marker::PhantomData;

use sqlx::postgres::PgRow;
use sqlx::{Encode, FromRow, PgConnection, PgPool, Postgres, Transaction, Type};
use survey_core::pagination::MAX_PAGE_LIMIT;

pub use changeset::{Changes, Changeset, Field, FieldKind, FieldValue};

/// A table-backed record the generic repository can read and write.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static {
    /// Human-readable name used in logs and not-found errors.
    const NAME: &'static str;
    const TABLE: &'static str;
    const PRIMARY_KEY: &'static str;
    /// Select list shared by every query that returns this entity.
    const COLUMNS: &'static str;
    /// Stable ordering for list queries.
    const ORDER_BY: &'static str = Self::PRIMARY_KEY;
    /// Writable columns. A client-supplied primary key is listed too; it is
    /// still never updated.
    const FIELDS: &'static [Field];

    type Id: for<'q> Encode<'q, Postgres> + Type<Postgres> + Clone + Display + Send + Sync + 'static;
    type Create: Changes + Send + Sync;

    fn id(&self) -> Self::Id;
}

/// Generic repository bound to one entity type.
pub struct CrudRepo<E>(PhantomData<fn() -> E>);

impl<E: Entity> CrudRepo<E> {
    /// Fetch one entity by primary key.
    pub async fn get(pool: &PgPool, id: E::Id) -> Result<Option<E>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::find_on(&mut conn, id).await
    }

    /// Fetch up to `limit` entities after skipping `skip`, in `E::ORDER_BY`
    /// order. Negative arguments are treated as zero and `limit` is capped at
    /// [`MAX_PAGE_LIMIT`].
    pub async fn get_all(pool: &PgPool, skip: i64, limit: i64) -> Result<Vec<E>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY {} LIMIT $1 OFFSET $2",
            E::COLUMNS,
            E::TABLE,
            E::ORDER_BY
        );
        sqlx::query_as::<_, E>(&query)
            .bind(limit.clamp(0, MAX_PAGE_LIMIT))
            .bind(skip.max(0))
            .fetch_all(pool)
            .await
    }

    /// Insert a row built from only the fields `input` provides, returning
    /// the stored entity including generated columns.
    pub async fn create(pool: &PgPool, input: &E::Create) -> Result<E, sqlx::Error> {
        let changes = input.changeset();
        tracing::info!(
            entity = E::NAME,
            columns = ?changes.columns().collect::<Vec<_>>(),
            "Creating entity"
        );

        let mut builder = changes.into_insert(E::TABLE, E::COLUMNS);
        let mut tx = pool.begin().await?;
        let created = builder
            .build_query_as::<E>()
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(created)
    }

    /// Apply `changes` to `existing` and return the stored result.
    ///
    /// The primary key and any column that is not one of `E::FIELDS` are
    /// dropped first. With nothing left to write the row is simply re-read.
    /// A row that no longer exists yields [`sqlx::Error::RowNotFound`].
    pub async fn update(pool: &PgPool, existing: &E, mut changes: Changeset) -> Result<E, sqlx::Error> {
        changes.remove(E::PRIMARY_KEY);
        changes.retain_fields(E::FIELDS);
        let id = existing.id();

        if changes.is_empty() {
            return Self::get(pool, id).await?.ok_or(sqlx::Error::RowNotFound);
        }

        tracing::debug!(
            entity = E::NAME,
            %id,
            columns = ?changes.columns().collect::<Vec<_>>(),
            "Updating entity"
        );

        let mut builder = changes.into_update(E::TABLE, E::PRIMARY_KEY);
        builder.push_bind(id);
        builder.push(format!(" RETURNING {}", E::COLUMNS));

        let mut tx = pool.begin().await?;
        let updated = builder
            .build_query_as::<E>()
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;
        tx.commit().await?;
        Ok(updated)
    }

    /// Remove the entity with `id`, returning it, or `None` if nothing matched.
    pub async fn delete(pool: &PgPool, id: E::Id) -> Result<Option<E>, sqlx::Error> {
        let query = format!(
            "DELETE FROM {} WHERE {} = $1 RETURNING {}",
            E::TABLE,
            E::PRIMARY_KEY,
            E::COLUMNS
        );

        let mut tx = pool.begin().await?;
        let removed = sqlx::query_as::<_, E>(&query)
            .bind(id.clone())
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        if removed.is_some() {
            tracing::debug!(entity = E::NAME, %id, "Deleted entity");
        }
        Ok(removed)
    }

    /// Primary-key lookup on an already checked-out connection.
    pub(crate) async fn find_on(conn: &mut PgConnection, id: E::Id) -> Result<Option<E>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            E::COLUMNS,
            E::TABLE,
            E::PRIMARY_KEY
        );
        sqlx::query_as::<_, E>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Load every row whose `column` equals `value`, in `E::ORDER_BY` order.
    ///
    /// This is the eager-loading half of a detail lookup: the parent row is
    /// read first, then each related collection with one query apiece.
    pub(crate) async fn load_by<V>(
        conn: &mut PgConnection,
        column: &str,
        value: V,
    ) -> Result<Vec<E>, sqlx::Error>
    where
        V: for<'q> Encode<'q, Postgres> + Type<Postgres> + Send + 'static,
    {
        let query = format!(
            "SELECT {} FROM {} WHERE {column} = $1 ORDER BY {}",
            E::COLUMNS,
            E::TABLE,
            E::ORDER_BY
        );
        sqlx::query_as::<_, E>(&query)
            .bind(value)
            .fetch_all(conn)
            .await
    }
}

/// Open a read-only `REPEATABLE READ` transaction so every query of a
/// detail lookup sees the same snapshot.
pub(crate) async fn begin_snapshot(pool: &PgPool) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}
