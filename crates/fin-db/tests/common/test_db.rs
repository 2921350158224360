use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Create a test pool with in-memory SQLite.
///
/// A single connection, so every query in a test sees the same in-memory
/// database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
