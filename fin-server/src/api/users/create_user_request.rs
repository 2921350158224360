use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Display name (required, 3-100 characters)
    pub name: String,

    /// Unique email address (required)
    pub email: String,

    /// Plaintext password (required, at least 6 characters)
    pub password: String,
}
