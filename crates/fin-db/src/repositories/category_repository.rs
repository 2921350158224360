//! Category repository for CRUD operations on a user's categories.

use crate::{DbError, Result as DbErrorResult, owned, owned::OwnedEntity};

use fin_core::{Category, CategoryKind, ErrorLocation};

use std::panic::Location;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite};

impl OwnedEntity for Category {
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static str = "id, user_id, name, kind";

    fn from_row(row: &SqliteRow) -> DbErrorResult<Self> {
        let kind: String = row.try_get("kind")?;

        Ok(Category {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            name: row.try_get("name")?,
            kind: CategoryKind::from_str(&kind).map_err(|e| DbError::Initialization {
                message: format!("Invalid category kind in categories.kind: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
        })
    }
}

pub struct CategoryRepository;

impl CategoryRepository {
    pub async fn create<'e, E>(
        executor: E,
        user_id: i64,
        name: &str,
        kind: CategoryKind,
    ) -> DbErrorResult<Category>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO categories (user_id, name, kind)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(kind.as_str())
        .execute(executor)
        .await?;

        Ok(Category {
            id: result.last_insert_rowid(),
            user_id,
            name: name.to_string(),
            kind,
        })
    }

    pub async fn find_by_id<'e, E>(
        executor: E,
        id: i64,
        user_id: i64,
    ) -> DbErrorResult<Option<Category>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        owned::find_by_id::<Category, _>(executor, id, user_id).await
    }

    /// Name lookup scoped to one user, for the per-user uniqueness rule.
    pub async fn find_by_name<'e, E>(
        executor: E,
        user_id: i64,
        name: &str,
    ) -> DbErrorResult<Option<Category>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, user_id, name, kind
                FROM categories
                WHERE user_id = ? AND name = ?
            "#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(Category::from_row).transpose()
    }

    pub async fn list<'e, E>(
        executor: E,
        user_id: i64,
        skip: i64,
        limit: i64,
    ) -> DbErrorResult<Vec<Category>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        owned::list::<Category, _>(executor, user_id, skip, limit).await
    }

    pub async fn update<'e, E>(executor: E, category: &Category) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE categories
                SET name = ?, kind = ?
                WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&category.name)
        .bind(category.kind.as_str())
        .bind(category.id)
        .bind(category.user_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(executor: E, id: i64, user_id: i64) -> DbErrorResult<bool>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        owned::delete::<Category, _>(executor, id, user_id).await
    }
}
