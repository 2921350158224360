//! Transaction repository for CRUD operations on a user's transactions.

use crate::{DbError, Result as DbErrorResult, owned, owned::OwnedEntity};

use fin_core::{ErrorLocation, Transaction, TransactionKind};

use std::panic::Location;
use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Executor, Row, Sqlite};

impl OwnedEntity for Transaction {
    const TABLE: &'static str = "transactions";
    const COLUMNS: &'static str =
        "id, user_id, account_id, category_id, description, amount, kind, date";

    fn from_row(row: &SqliteRow) -> DbErrorResult<Self> {
        let kind: String = row.try_get("kind")?;

        Ok(Transaction {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            account_id: row.try_get("account_id")?,
            category_id: row.try_get("category_id")?,
            description: row.try_get("description")?,
            amount: row.try_get("amount")?,
            kind: TransactionKind::from_str(&kind).map_err(|e| DbError::Initialization {
                message: format!("Invalid transaction kind in transactions.kind: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            date: row.try_get("date")?,
        })
    }
}

pub struct TransactionRepository;

impl TransactionRepository {
    #[allow(clippy::too_many_arguments)]
    pub async fn create<'e, E>(
        executor: E,
        user_id: i64,
        account_id: i64,
        category_id: i64,
        description: &str,
        amount: f64,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> DbErrorResult<Transaction>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO transactions (
                    user_id, account_id, category_id, description, amount, kind, date
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user_id)
        .bind(account_id)
        .bind(category_id)
        .bind(description)
        .bind(amount)
        .bind(kind.as_str())
        .bind(date)
        .execute(executor)
        .await?;

        Ok(Transaction {
            id: result.last_insert_rowid(),
            user_id,
            account_id,
            category_id,
            description: description.to_string(),
            amount,
            kind,
            date,
        })
    }

    pub async fn find_by_id<'e, E>(
        executor: E,
        id: i64,
        user_id: i64,
    ) -> DbErrorResult<Option<Transaction>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        owned::find_by_id::<Transaction, _>(executor, id, user_id).await
    }

    pub async fn list<'e, E>(
        executor: E,
        user_id: i64,
        skip: i64,
        limit: i64,
    ) -> DbErrorResult<Vec<Transaction>>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        owned::list::<Transaction, _>(executor, user_id, skip, limit).await
    }

    pub async fn update<'e, E>(executor: E, transaction: &Transaction) -> DbErrorResult<()>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        sqlx::query(
            r#"
                UPDATE transactions
                SET description = ?, amount = ?, kind = ?, category_id = ?, date = ?
                WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&transaction.description)
        .bind(transaction.amount)
        .bind(transaction.kind.as_str())
        .bind(transaction.category_id)
        .bind(transaction.date)
        .bind(transaction.id)
        .bind(transaction.user_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn delete<'e, E>(executor: E, id: i64, user_id: i64) -> DbErrorResult<bool>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        owned::delete::<Transaction, _>(executor, id, user_id).await
    }
}
