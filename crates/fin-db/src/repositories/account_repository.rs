//! Account repository for CRUD operations on a user's accounts.

use crate::{DbError, Result as DbErrorResult, owned, owned::OwnedEntity};

use fin_core::{Account, AccountKind, ErrorLocation};

use std::panic::Location;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite};

impl OwnedEntity for Account {
    const TABLE: &'static str = "accounts";
    const COLUMNS: &'static str = "id, user_id, name, kind, balance";

    fn from_row(row: &SqliteRow) -> DbErrorResult<Self> {
        let kind: String = row.try_get("kind")?;

        Ok(Account {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            name: row.try_get("name")?,
            kind: AccountKind::from_str(&kind).map_err(|e| DbError::Initialization {
                message: format!("Invalid account kind in accounts.kind: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            balance: row.try_get("balance")?,
        })
    }
}

pub struct AccountRepository;

impl AccountRepository {
    pub async fn create<'e, E>(
        executor: E,
        user_id: i64,
        name: &str,
        kind: AccountKind,
        balance: f64,
    ) -> DbErrorResult<Account>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO accounts (user_id, name, kind, balance)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(kind.as_str())
        .bind(balance)
        .execute(executor)
        .await?;

        Ok(Account {
            id: result.last_insert_rowid(),
            user_id,
            name: name.to_string(),
            kind,
            balance,
        })
    }

    pub async fn find_by_id<'e, E>(
        executor: E,
        id: i64,
        user_id: i64,
    ) -> DbErrorResult<Option<Account>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        owned::find_by_id::<Account, _>(executor, id, user_id).await
    }

    /// Name lookup scoped to one user, for the per-user uniqueness rule.
    pub async fn find_by_name<'e, E>(
        executor: E,
        user_id: i64,
        name: &str,
    ) -> DbErrorResult<Option<Account>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, user_id, name, kind, balance
                FROM accounts
                WHERE user_id = ? AND name = ?
            "#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(Account::from_row).transpose()
    }

    pub async fn list<'e, E>(
        executor: E,
        user_id: i64,
        skip: i64,
        limit: i64,
    ) -> DbErrorResult<Vec<Account>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        owned::list::<Account, _>(executor, user_id, skip, limit).await
    }

    pub async fn update<'e, E>(executor: E, account: &Account) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE accounts
                SET name = ?, kind = ?
                WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&account.name)
        .bind(account.kind.as_str())
        .bind(account.id)
        .bind(account.user_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(executor: E, id: i64, user_id: i64) -> DbErrorResult<bool>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        owned::delete::<Account, _>(executor, id, user_id).await
    }
}
