use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::errors::AppError;
use crate::handlers::check_auth;
use crate::models::{Booking, BookingAction, BookingStats, BookingStatus, StatusFilter};
use crate::services::booking_store::{aggregate_stats, filter_by_status, recent, upcoming_confirmed};
use crate::services::calendar::booked_days;
use crate::services::events::STATUS_CHANGE_EVENT;
use crate::state::AppState;

const RECENT_LIMIT: usize = 5;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    #[serde(flatten)]
    booking: Booking,
    amount_label: String,
    actions: &'static [BookingAction],
}

impl From<&Booking> for BookingResponse {
    fn from(b: &Booking) -> Self {
        Self {
            amount_label: b.amount.to_string(),
            actions: b.status.available_actions(),
            booking: b.clone(),
        }
    }
}

fn to_responses<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Vec<BookingResponse> {
    bookings.into_iter().map(BookingResponse::from).collect()
}

// GET /api/admin/stats
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    stats: BookingStats,
    total_earnings_label: String,
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<StatsResponse>, AppError> {
    check_auth(&headers, None, &state.config.admin_token)?;

    let stats = aggregate_stats(&state.bookings());
    Ok(Json(StatsResponse {
        total_earnings_label: stats.total_earnings.to_string(),
        stats,
    }))
}

// GET /api/admin/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    check_auth(&headers, None, &state.config.admin_token)?;

    let filter = match query.status.as_deref() {
        Some(s) => s.parse::<StatusFilter>()?,
        None => StatusFilter::All,
    };

    let bookings = state.bookings();
    Ok(Json(to_responses(filter_by_status(&bookings, filter))))
}

// GET /api/admin/bookings/recent
#[derive(Deserialize)]
pub struct RecentQuery {
    pub limit: Option<usize>,
}

pub async fn get_recent(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    check_auth(&headers, None, &state.config.admin_token)?;

    let bookings = state.bookings();
    let limit = query.limit.unwrap_or(RECENT_LIMIT);
    Ok(Json(to_responses(recent(&bookings, limit))))
}

// GET /api/admin/bookings/upcoming
pub async fn get_upcoming(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    check_auth(&headers, None, &state.config.admin_token)?;

    let bookings = state.bookings();
    Ok(Json(to_responses(upcoming_confirmed(&bookings))))
}

// GET /api/admin/bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<BookingResponse>, AppError> {
    check_auth(&headers, None, &state.config.admin_token)?;

    state
        .booking(id)
        .map(|b| Json(BookingResponse::from(&b)))
        .ok_or_else(|| AppError::NotFound("booking not found".to_string()))
}

fn apply(state: &AppState, id: u64, status: BookingStatus) -> Result<Json<BookingResponse>, AppError> {
    state
        .transition(id, status)
        .map(|b| Json(BookingResponse::from(&b)))
        .ok_or_else(|| AppError::NotFound("booking not found".to_string()))
}

// POST /api/admin/bookings/:id/confirm
pub async fn confirm_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<BookingResponse>, AppError> {
    check_auth(&headers, None, &state.config.admin_token)?;
    apply(&state, id, BookingAction::Confirm.target_status())
}

// POST /api/admin/bookings/:id/reject
pub async fn reject_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<BookingResponse>, AppError> {
    check_auth(&headers, None, &state.config.admin_token)?;
    apply(&state, id, BookingAction::Reject.target_status())
}

// POST /api/admin/bookings/:id/complete
pub async fn complete_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Json<BookingResponse>, AppError> {
    check_auth(&headers, None, &state.config.admin_token)?;
    apply(&state, id, BookingAction::Complete.target_status())
}

// POST /api/admin/bookings/:id/status
#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<StatusRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    check_auth(&headers, None, &state.config.admin_token)?;

    let status = body.status.parse::<BookingStatus>()?;
    apply(&state, id, status)
}

// GET /api/admin/calendar
#[derive(Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Serialize)]
pub struct CalendarResponse {
    year: i32,
    month: u32,
    days: Vec<u32>,
}

pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    check_auth(&headers, None, &state.config.admin_token)?;

    let today = Utc::now().date_naive();
    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or(today.month());
    if !(1..=12).contains(&month) {
        return Err(AppError::BadRequest(format!("invalid month: {month}")));
    }

    let days = booked_days(&state.bookings(), year, month);
    Ok(Json(CalendarResponse { year, month, days }))
}

// GET /api/admin/events
#[derive(Deserialize)]
pub struct SseQuery {
    pub token: Option<String>,
}

pub async fn events_stream(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<SseQuery>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>, AppError> {
    check_auth(&headers, query.token.as_deref(), &state.config.admin_token)?;

    let rx = state.events_tx.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(change) => {
            let data = serde_json::to_string(&change).unwrap_or_default();
            Some(Ok(Event::default().data(data).event(STATUS_CHANGE_EVENT)))
        }
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(skipped = n, "status change subscriber lagged");
            None
        }
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(30))))
}
