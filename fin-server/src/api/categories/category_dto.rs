use fin_core::Category;

use serde::Serialize;

/// Category DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct CategoryDto {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub kind: String,
}

impl From<Category> for CategoryDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            user_id: c.user_id,
            name: c.name,
            kind: c.kind.as_str().to_string(),
        }
    }
}
