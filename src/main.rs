use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use courtbook::config::AppConfig;
use courtbook::handlers;
use courtbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let state = Arc::new(AppState::new(config.clone()));
    tracing::info!(
        courts = state.courts.len(),
        time_slots = state.time_slots.len(),
        seeded_bookings = state.ledger.len(),
        "loaded booking catalog"
    );

    let mut app = handlers::router(state).layer(TraceLayer::new_for_http());
    if config.cors_allow_any_origin {
        tracing::warn!("CORS is open to any origin");
        app = app.layer(CorsLayer::permissive());
    }

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
