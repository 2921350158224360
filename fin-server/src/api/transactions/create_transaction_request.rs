use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// What the money movement was (required)
    pub description: String,

    /// Strictly positive amount (required)
    pub amount: f64,

    /// One of: income, expense (required)
    pub kind: String,

    /// Id of one of the caller's accounts (required)
    pub account_id: i64,

    /// Id of one of the caller's categories (required)
    pub category_id: i64,

    /// Defaults to today when omitted
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
