use serde::Deserialize;

/// Partial update: omitted fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: Option<String>,

    /// One of: income, expense
    #[serde(default)]
    pub kind: Option<String>,
}
