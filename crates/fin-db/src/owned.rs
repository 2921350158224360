//! Generic access layer for user-owned rows.
//!
//! Every query built here carries the owning user's id in its WHERE clause,
//! so a row id belonging to another user behaves exactly like a missing row.
//! Repositories delegate their read/delete paths to these functions instead
//! of restating the ownership filter per entity.

use crate::Result as DbResult;

use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Sqlite};

/// A persisted row scoped to its owning user.
pub trait OwnedEntity: Sized + Send + Unpin {
    /// Table name.
    const TABLE: &'static str;
    /// Column list for SELECT statements.
    const COLUMNS: &'static str;

    /// Map a row fetched with [`OwnedEntity::COLUMNS`].
    fn from_row(row: &SqliteRow) -> DbResult<Self>;
}

/// Fetch one row by (id, user_id).
pub async fn find_by_id<'e, T, E>(executor: E, id: i64, user_id: i64) -> DbResult<Option<T>>
where
    T: OwnedEntity,
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "SELECT {} FROM {} WHERE id = ? AND user_id = ?",
        T::COLUMNS,
        T::TABLE
    );

    let row = sqlx::query(&sql)
        .bind(id)
        .bind(user_id)
        .fetch_optional(executor)
        .await?;

    row.as_ref().map(T::from_row).transpose()
}

/// List a user's rows with skip/limit pagination, in store order.
pub async fn list<'e, T, E>(executor: E, user_id: i64, skip: i64, limit: i64) -> DbResult<Vec<T>>
where
    T: OwnedEntity,
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!(
        "SELECT {} FROM {} WHERE user_id = ? LIMIT ? OFFSET ?",
        T::COLUMNS,
        T::TABLE
    );

    let rows = sqlx::query(&sql)
        .bind(user_id)
        .bind(limit)
        .bind(skip)
        .fetch_all(executor)
        .await?;

    rows.iter().map(T::from_row).collect()
}

/// Delete one row by (id, user_id). Returns whether a row was removed.
pub async fn delete<'e, T, E>(executor: E, id: i64, user_id: i64) -> DbResult<bool>
where
    T: OwnedEntity,
    E: Executor<'e, Database = Sqlite>,
{
    let sql = format!("DELETE FROM {} WHERE id = ? AND user_id = ?", T::TABLE);

    let result = sqlx::query(&sql)
        .bind(id)
        .bind(user_id)
        .execute(executor)
        .await?;

    Ok(result.rows_affected() > 0)
}
