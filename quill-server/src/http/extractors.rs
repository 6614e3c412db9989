//! Custom Axum extractors

use axum::extract::FromRequest;

use super::error::ApiError;

/// JSON body extractor whose rejection surfaces as a JSON `ApiError`
/// instead of axum's plain-text response.
///
/// Absent, malformed, or wrongly-typed request bodies all come back as
/// `400 {"error": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
