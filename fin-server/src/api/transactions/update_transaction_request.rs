use chrono::NaiveDate;
use serde::Deserialize;

/// Partial update: omitted fields are left unchanged. The account a
/// transaction belongs to cannot be changed.
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub amount: Option<f64>,

    /// One of: income, expense
    #[serde(default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub category_id: Option<i64>,

    #[serde(default)]
    pub date: Option<NaiveDate>,
}
