use aetheris_api::{app, AppState, DEFAULT_LOG_FILTER};
use aetheris_ops::FlightOperations;
use aetheris_store::{app_config::Config, FlightStore};
use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Aetheris flight inventory on port {}", config.server.port);

    let store = Arc::new(FlightStore::new());
    let flights = if config.inventory.seed_on_startup {
        FlightOperations::seeded(store, chrono::Local::now().date_naive())
    } else {
        FlightOperations::new(store)
    };

    let app_state = AppState {
        flights,
        inventory: config.inventory.clone(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
