//! Database migrations for the blog tables

use sqlx::SqlitePool;

/// Run all migrations. Safe to call on every startup.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create posts table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            user_id INTEGER NOT NULL REFERENCES users(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index for the user -> posts lookup
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_posts_user ON posts(user_id)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_pool_with_options;

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool");

        run(&pool).await.expect("first run");
        run(&pool).await.expect("second run");

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'posts')",
        )
        .fetch_all(&pool)
        .await
        .expect("table listing");

        assert_eq!(tables.len(), 2);
    }
}
