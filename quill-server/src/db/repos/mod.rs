//! Repositories - one per table

pub mod posts;
pub mod users;

pub use posts::{Post, PostRepo, PostWithAuthor};
pub use users::{User, UserRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{field} already exists")]
    Conflict { field: &'static str },
}
