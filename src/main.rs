use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use photobooking::config::{AppConfig, DEFAULT_ADMIN_TOKEN};
use photobooking::seed;
use photobooking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    if config.admin_token == DEFAULT_ADMIN_TOKEN {
        tracing::warn!("ADMIN_TOKEN is not set, using the default token");
    }

    let store = seed::booking_store()?;
    let catalog = seed::catalog();
    tracing::info!(
        bookings = store.bookings().len(),
        photos = catalog.photos.len(),
        services = catalog.services.len(),
        "loaded sample data"
    );

    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(AppState::new(config, store, catalog));
    let app = photobooking::app(state);

    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
