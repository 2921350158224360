use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Account name, unique among the caller's accounts (required)
    pub name: String,

    /// One of: checking, savings, investment, digital, wallet (required)
    pub kind: String,

    /// Starting balance; defaults to zero
    #[serde(default)]
    pub initial_balance: f64,
}
