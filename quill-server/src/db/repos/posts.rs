//! Post repository
//!
//! List queries JOIN the owning user so callers never issue a second
//! lookup per post.

use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::{PostContent, PostTitle};

/// Post record from database
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

/// Post joined with the owning user's username for list display
#[derive(Debug, Clone, FromRow)]
pub struct PostWithAuthor {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub username: String,
}

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new post, returning the stored record with its fresh id.
    ///
    /// The caller is responsible for verifying `user_id` resolves to an
    /// existing user; the foreign key constraint is a backstop only.
    pub async fn create(
        &self,
        title: PostTitle,
        content: PostContent,
        user_id: i64,
    ) -> Result<Post, DbError> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, user_id)
            VALUES (?1, ?2, ?3)
            RETURNING id, title, content, user_id
            "#,
        )
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(post)
    }

    /// List all posts with the owning username. Single query with JOIN
    /// (no N+1). No ORDER BY - ordering is unspecified by contract.
    pub async fn list(&self) -> Result<Vec<PostWithAuthor>, DbError> {
        let posts = sqlx::query_as::<_, PostWithAuthor>(
            r#"
            SELECT p.id, p.title, p.content, p.user_id, u.username
            FROM posts p
            JOIN users u ON u.id = p.user_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// List the posts belonging to one user - the user -> posts direction
    /// of the relationship.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, user_id
            FROM posts
            WHERE user_id = ?1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }
}
