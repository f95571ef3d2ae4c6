use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bekam::config::AppConfig;
use bekam::handlers;
use bekam::services::backend;
use bekam::services::dedup::SubmissionGuard;
use bekam::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    let backend = backend::from_config(&config)?;

    let state = Arc::new(AppState {
        backend,
        submissions: SubmissionGuard::default(),
    });

    let app = Router::new()
        .route("/", get(handlers::booking::booking_page))
        .route("/bookings", post(handlers::booking::submit_booking))
        .route(
            "/api/bookings",
            get(handlers::api::list_bookings).post(handlers::api::create_booking),
        )
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
