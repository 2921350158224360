use sqlx::SqlitePool;

/// Insert a user row and return its id.
pub async fn insert_user(pool: &SqlitePool, email: &str) -> i64 {
    sqlx::query("INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?)")
        .bind("Test User")
        .bind(email)
        .bind("0000000000000000000000000000000000000000000000000000000000000000")
        .execute(pool)
        .await
        .expect("Failed to insert test user")
        .last_insert_rowid()
}

/// Insert an account row and return its id.
pub async fn insert_account(pool: &SqlitePool, user_id: i64, name: &str) -> i64 {
    sqlx::query("INSERT INTO accounts (user_id, name, kind, balance) VALUES (?, ?, ?, ?)")
        .bind(user_id)
        .bind(name)
        .bind("checking")
        .bind(100.0)
        .execute(pool)
        .await
        .expect("Failed to insert test account")
        .last_insert_rowid()
}

/// Insert a category row and return its id.
pub async fn insert_category(pool: &SqlitePool, user_id: i64, name: &str, kind: &str) -> i64 {
    sqlx::query("INSERT INTO categories (user_id, name, kind) VALUES (?, ?, ?)")
        .bind(user_id)
        .bind(name)
        .bind(kind)
        .execute(pool)
        .await
        .expect("Failed to insert test category")
        .last_insert_rowid()
}
