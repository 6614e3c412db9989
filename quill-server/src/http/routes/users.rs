//! User endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::AppJson;
use crate::http::server::AppState;
use crate::models::Username;

/// Create user request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// User response
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
        }
    }
}

/// GET /users - list all users
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /users - create a new user
async fn create_user(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    // Absent and empty-string usernames get the same answer
    let Some(username) = req.username.filter(|u| !u.is_empty()) else {
        return Err(ApiError::BadRequest("username is required".into()));
    };

    let username = Username::new(&username)?;
    let user = UserRepo::new(&state.pool).create(username).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/users", get(list_users).post(create_user))
}
