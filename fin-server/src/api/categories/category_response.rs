use crate::CategoryDto;

use serde::Serialize;

/// Single category response
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: CategoryDto,
}
