use serde::Deserialize;

/// Partial update: omitted fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    #[serde(default)]
    pub name: Option<String>,

    /// One of: checking, savings, investment, digital, wallet
    #[serde(default)]
    pub kind: Option<String>,
}
