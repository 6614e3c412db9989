//! Post endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Post, PostRepo, PostWithAuthor, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::AppJson;
use crate::http::server::AppState;
use crate::models::{PostContent, PostTitle};

/// Create post request
#[derive(Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Created post response. Carries no username - only the list response
/// resolves the owner.
#[derive(Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            user_id: p.user_id,
        }
    }
}

/// Post list entry, owner resolved to their username
#[derive(Serialize)]
pub struct PostWithAuthorResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub username: String,
}

impl From<PostWithAuthor> for PostWithAuthorResponse {
    fn from(p: PostWithAuthor) -> Self {
        Self {
            id: p.id,
            title: p.title,
            content: p.content,
            user_id: p.user_id,
            username: p.username,
        }
    }
}

/// GET /posts - list all posts with their owners' usernames
async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PostWithAuthorResponse>>, ApiError> {
    let posts = PostRepo::new(&state.pool).list().await?;
    Ok(Json(
        posts.into_iter().map(PostWithAuthorResponse::from).collect(),
    ))
}

/// POST /posts - create a new post tied to an existing user
async fn create_post(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), ApiError> {
    let title = req.title.filter(|t| !t.is_empty());
    let content = req.content.filter(|c| !c.is_empty());
    // id 0 is never assigned; treat it as absent like the empty strings
    let user_id = req.user_id.filter(|id| *id != 0);

    let (Some(title), Some(content), Some(user_id)) = (title, content, user_id) else {
        return Err(ApiError::BadRequest(
            "title, content, and user_id are required".into(),
        ));
    };

    let title = PostTitle::new(&title)?;
    let content = PostContent::new(&content)?;

    if UserRepo::new(&state.pool).get(user_id).await?.is_none() {
        return Err(ApiError::BadRequest("User not found".into()));
    }

    let post = PostRepo::new(&state.pool)
        .create(title, content, user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/posts", get(list_posts).post(create_post))
}
