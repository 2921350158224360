use crate::{AppState, api, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Authentication
        .route("/api/v1/auth/login", post(api::auth::auth::login))
        // Users
        .route("/api/v1/users", post(api::users::users::create_user))
        .route("/api/v1/users/me", get(api::users::users::get_current_user))
        // Accounts
        .route(
            "/api/v1/accounts",
            get(api::accounts::accounts::list_accounts).post(api::accounts::accounts::create_account),
        )
        .route(
            "/api/v1/accounts/{id}",
            get(api::accounts::accounts::get_account)
                .put(api::accounts::accounts::update_account)
                .delete(api::accounts::accounts::delete_account),
        )
        // Categories
        .route(
            "/api/v1/categories",
            get(api::categories::categories::list_categories)
                .post(api::categories::categories::create_category),
        )
        .route(
            "/api/v1/categories/{id}",
            get(api::categories::categories::get_category)
                .put(api::categories::categories::update_category)
                .delete(api::categories::categories::delete_category),
        )
        // Transactions
        .route(
            "/api/v1/transactions",
            get(api::transactions::transactions::list_transactions)
                .post(api::transactions::transactions::create_transaction),
        )
        .route(
            "/api/v1/transactions/{id}",
            get(api::transactions::transactions::get_transaction)
                .put(api::transactions::transactions::update_transaction)
                .delete(api::transactions::transactions::delete_transaction),
        )
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
