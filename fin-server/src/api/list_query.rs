use serde::Deserialize;

fn default_limit() -> i64 {
    100
}

/// Pagination parameters shared by all list endpoints.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Rows to skip from the start of the user's records.
    #[serde(default)]
    pub skip: i64,
    /// Maximum rows to return.
    #[serde(default = "default_limit")]
    pub limit: i64,
}
