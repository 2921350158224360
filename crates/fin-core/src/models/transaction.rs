//! Transaction entity - a single money movement on an account.

use crate::TransactionKind;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A transaction references an account and a category owned by the same
/// user that owns the transaction itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub account_id: i64,
    pub category_id: i64,
    pub description: String,
    /// Strictly positive; the kind carries the direction.
    pub amount: f64,
    pub kind: TransactionKind,
    pub date: NaiveDate,
}
