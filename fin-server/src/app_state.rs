use fin_auth::TokenIssuer;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every request handler.
///
/// Both members are cheap to clone; nothing here is mutable between
/// requests.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub token_issuer: Arc<TokenIssuer>,
}
