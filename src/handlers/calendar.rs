use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::errors::AppError;
use crate::handlers::check_auth;
use crate::services::calendar::{generate_feed, generate_ics};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CalendarAuth {
    pub token: Option<String>,
}

fn ics_response(body: String, filename: Option<&str>) -> Response {
    let content_type = (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string());
    match filename {
        Some(name) => (
            [
                content_type,
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{name}\""),
                ),
            ],
            body,
        )
            .into_response(),
        None => ([content_type], body).into_response(),
    }
}

// GET /calendar/feed.ics
pub async fn calendar_feed(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(auth): Query<CalendarAuth>,
) -> Result<Response, AppError> {
    check_auth(&headers, auth.token.as_deref(), &state.config.admin_token)?;

    let feed = generate_feed(&state.bookings(), &state.config.studio_name);
    Ok(ics_response(feed, None))
}

// GET /calendar/:booking_id
pub async fn download_ics(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(auth): Query<CalendarAuth>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    check_auth(&headers, auth.token.as_deref(), &state.config.admin_token)?;

    // Strip .ics suffix if present
    let booking_id = raw_id.strip_suffix(".ics").unwrap_or(&raw_id);
    let not_found = || AppError::NotFound("booking not found".to_string());
    let id: u64 = booking_id.parse().map_err(|_| not_found())?;

    let booking = state.booking(id).ok_or_else(not_found)?;

    let ics = generate_ics(&booking, &state.config.studio_name);
    let filename = format!("booking-{id}.ics");
    Ok(ics_response(ics, Some(&filename)))
}
