pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/admin/stats", get(handlers::admin::get_stats))
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route("/api/admin/bookings/recent", get(handlers::admin::get_recent))
        .route("/api/admin/bookings/upcoming", get(handlers::admin::get_upcoming))
        .route("/api/admin/bookings/:id", get(handlers::admin::get_booking))
        .route(
            "/api/admin/bookings/:id/confirm",
            post(handlers::admin::confirm_booking),
        )
        .route(
            "/api/admin/bookings/:id/reject",
            post(handlers::admin::reject_booking),
        )
        .route(
            "/api/admin/bookings/:id/complete",
            post(handlers::admin::complete_booking),
        )
        .route(
            "/api/admin/bookings/:id/status",
            post(handlers::admin::update_status),
        )
        .route("/api/admin/calendar", get(handlers::admin::get_calendar))
        .route("/api/admin/events", get(handlers::admin::events_stream))
        .route("/calendar/feed.ics", get(handlers::calendar::calendar_feed))
        .route(
            "/calendar/:booking_id",
            get(handlers::calendar::download_ics),
        )
        .route("/api/gallery/categories", get(handlers::catalog::get_categories))
        .route("/api/gallery/photos", get(handlers::catalog::get_photos))
        .route("/api/gallery/photos/:id", get(handlers::catalog::get_photo))
        .route("/api/services", get(handlers::catalog::get_services))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
