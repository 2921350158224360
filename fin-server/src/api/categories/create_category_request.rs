use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    /// Category name, unique among the caller's categories (required)
    pub name: String,

    /// One of: income, expense (required)
    pub kind: String,
}
