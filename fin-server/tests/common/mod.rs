#![allow(dead_code)]

//! Test infrastructure for fin-server API tests

use fin_auth::{TokenIssuer, hash_password};
use fin_server::AppState;

use std::sync::Arc;

use chrono::Duration;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub const TEST_PASSWORD: &str = "password123";

/// Create a test pool with in-memory SQLite.
///
/// A single connection, so every request in a test sees the same in-memory
/// database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/fin-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
        token_issuer: Arc::new(TokenIssuer::with_hs256(TEST_SECRET, Duration::minutes(30))),
    }
}

/// Create a test user and return its id
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> i64 {
    sqlx::query("INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?)")
        .bind("Test User")
        .bind(email)
        .bind(hash_password(TEST_PASSWORD))
        .execute(pool)
        .await
        .expect("Failed to create test user")
        .last_insert_rowid()
}

/// Issue a bearer token for an email with the state's issuer
pub fn token_for(state: &AppState, email: &str) -> String {
    state
        .token_issuer
        .issue(email, None)
        .expect("Failed to issue test token")
}

/// Create a test account and return its id
pub async fn create_test_account(pool: &SqlitePool, user_id: i64, name: &str) -> i64 {
    sqlx::query("INSERT INTO accounts (user_id, name, kind, balance) VALUES (?, ?, ?, ?)")
        .bind(user_id)
        .bind(name)
        .bind("checking")
        .bind(100.0)
        .execute(pool)
        .await
        .expect("Failed to create test account")
        .last_insert_rowid()
}

/// Create a test category and return its id
pub async fn create_test_category(pool: &SqlitePool, user_id: i64, name: &str, kind: &str) -> i64 {
    sqlx::query("INSERT INTO categories (user_id, name, kind) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(name)
        .bind(kind)
        .execute(pool)
        .await
        .expect("Failed to create test category")
        .last_insert_rowid()
}

/// Create a test transaction and return its id
pub async fn create_test_transaction(
    pool: &SqlitePool,
    user_id: i64,
    account_id: i64,
    category_id: i64,
    description: &str,
) -> i64 {
    sqlx::query(
        r#"
            INSERT INTO transactions (
                user_id, account_id, category_id, description, amount, kind, date
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(account_id)
    .bind(category_id)
    .bind(description)
    .bind(25.0)
    .bind("expense")
    .bind("2026-08-01")
    .execute(pool)
    .await
    .expect("Failed to create test transaction")
    .last_insert_rowid()
}
