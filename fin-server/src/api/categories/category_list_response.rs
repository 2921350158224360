use crate::CategoryDto;

use serde::Serialize;

/// List of categories response
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryDto>,
}
