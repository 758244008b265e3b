pub mod admin;
pub mod calendar;
pub mod catalog;
pub mod health;

use axum::http::HeaderMap;

use crate::errors::AppError;

/// Accepts `Authorization: Bearer <token>`, or a `?token=` query value for
/// clients that cannot set headers.
pub(crate) fn check_auth(
    headers: &HeaderMap,
    query_token: Option<&str>,
    expected_token: &str,
) -> Result<(), AppError> {
    let header_token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match header_token.or(query_token) {
        Some(token) if token == expected_token => Ok(()),
        _ => Err(AppError::Unauthorized),
    }
}
