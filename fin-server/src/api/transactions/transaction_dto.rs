use fin_core::Transaction;

use serde::Serialize;

/// Transaction DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct TransactionDto {
    pub id: i64,
    pub user_id: i64,
    pub account_id: i64,
    pub category_id: i64,
    pub description: String,
    pub amount: f64,
    pub kind: String,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
}

impl From<Transaction> for TransactionDto {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            user_id: t.user_id,
            account_id: t.account_id,
            category_id: t.category_id,
            description: t.description,
            amount: t.amount,
            kind: t.kind.as_str().to_string(),
            date: t.date.to_string(),
        }
    }
}
