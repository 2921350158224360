//! User identity record.

use serde::{Deserialize, Serialize};

/// A registered user. The stored credential is a hex SHA-256 digest,
/// never the plaintext password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique, compared case-sensitively as stored.
    pub email: String,
    pub password_hash: String,
}
