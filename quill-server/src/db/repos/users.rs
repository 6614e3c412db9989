//! User repository
//!
//! Uniqueness is enforced by the database index; a duplicate insert is
//! reported as a conflict, not a check-then-insert.

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::Username;

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user, returning the stored record with its fresh id.
    ///
    /// A duplicate username trips the unique index and surfaces as
    /// [`DbError::Conflict`].
    pub async fn create(&self, username: Username) -> Result<User, DbError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username)
            VALUES (?1)
            RETURNING id, username
            "#,
        )
        .bind(username.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DbError::Conflict {
                field: "username",
            },
            other => DbError::Sqlx(other),
        })
    }

    /// List all users. No ORDER BY - the contract leaves ordering
    /// unspecified (insertion order in practice).
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username FROM users")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }

    /// Look up a single user by id.
    pub async fn get(&self, id: i64) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, pool::create_pool_with_options};

    async fn test_pool() -> SqlitePool {
        let pool = create_pool_with_options("sqlite::memory:", 1)
            .await
            .expect("pool");
        migrations::run(&pool).await.expect("migrations");
        pool
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let alice = repo.create(Username::new("alice").unwrap()).await.unwrap();
        let bob = repo.create(Username::new("bob").unwrap()).await.unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
        assert_eq!(alice.username, "alice");
    }

    #[tokio::test]
    async fn list_returns_all_users() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        assert!(repo.list().await.unwrap().is_empty());

        repo.create(Username::new("alice").unwrap()).await.unwrap();
        repo.create(Username::new("bob").unwrap()).await.unwrap();

        let users = repo.list().await.unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn get_by_id() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        let created = repo.create(Username::new("alice").unwrap()).await.unwrap();

        let found = repo.get(created.id).await.unwrap().expect("user exists");
        assert_eq!(found.username, "alice");

        assert!(repo.get(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_conflict() {
        let pool = test_pool().await;
        let repo = UserRepo::new(&pool);

        repo.create(Username::new("alice").unwrap()).await.unwrap();
        let err = repo
            .create(Username::new("alice").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::Conflict { field: "username" }));
    }
}
