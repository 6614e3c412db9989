//! Route modules - one per resource

pub mod health;
pub mod posts;
pub mod users;
